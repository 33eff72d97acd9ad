//! # Frontend Generator
//!
//! Client-side skeleton under `<frontend_root>/<kebab>/` with `components/`,
//! `pages/`, `hooks/` and `actions/` directories and a `types.ts` entity
//! definition. Outside full mode only `pages/Index.tsx` is emitted as a
//! minimal sample page.

use super::templates;
use super::{writer, ComponentPlan, ModuleContext, PlannedArtifact};
use crate::result::{FileKind, GenerationResult};

/// Directories and files the frontend generator would produce
#[must_use]
pub fn plan(ctx: &ModuleContext) -> ComponentPlan {
    let root = &ctx.frontend_root;
    let components = root.join("components");
    let pages = root.join("pages");
    let hooks = root.join("hooks");
    let actions = root.join("actions");
    let p = &ctx.pascal;

    let directories = vec![
        root.clone(),
        components.clone(),
        pages.clone(),
        hooks.clone(),
        actions.clone(),
    ];
    let mut files = vec![PlannedArtifact::new(
        root.join("types.ts"),
        FileKind::Types,
        templates::types,
    )];

    if ctx.full {
        files.extend([
            PlannedArtifact::new(pages.join("Index.tsx"), FileKind::Page, templates::index_page),
            PlannedArtifact::new(pages.join("Create.tsx"), FileKind::Page, templates::create_page),
            PlannedArtifact::new(pages.join("Edit.tsx"), FileKind::Page, templates::edit_page),
            PlannedArtifact::new(pages.join("Show.tsx"), FileKind::Page, templates::show_page),
            PlannedArtifact::new(
                components.join(format!("{p}Table.tsx")),
                FileKind::Component,
                templates::table,
            ),
            PlannedArtifact::new(
                components.join(format!("{p}Form.tsx")),
                FileKind::Component,
                templates::form,
            ),
            PlannedArtifact::new(
                hooks.join(format!("use{p}.ts")),
                FileKind::Hook,
                templates::hook,
            ),
            PlannedArtifact::new(
                actions.join(format!("{}Actions.ts", ctx.camel)),
                FileKind::Action,
                templates::actions,
            ),
        ]);
    } else {
        files.push(PlannedArtifact::new(
            pages.join("Index.tsx"),
            FileKind::Page,
            templates::sample_page,
        ));
    }

    ComponentPlan {
        component: "frontend",
        directories,
        files,
    }
}

/// Write the frontend skeleton, recording every outcome on `result`
pub fn generate(ctx: &ModuleContext, result: &mut GenerationResult) {
    tracing::info!(module = %ctx.kebab, root = %ctx.frontend_root.display(), "generating frontend");
    result.info(format!(
        "Generating frontend for {} in {}",
        ctx.kebab,
        ctx.frontend_root.display()
    ));
    writer::execute(&plan(ctx), ctx, result);
}
