//! # Backend Generator
//!
//! Server-side skeleton under `<backend_root>/<Pascal>/`:
//!
//! ```text
//! Billing/
//! ├── Http/
//! │   ├── Controllers/BillingController.php
//! │   ├── Requests/StoreBillingRequest.php
//! │   ├── Requests/UpdateBillingRequest.php
//! │   └── Resources/BillingResource.php      (resource only)
//! ├── Providers/BillingServiceProvider.php
//! ├── Services/BillingService.php
//! └── routes/web.php
//! ```
//!
//! The provider and the route table are always emitted; the provider is what
//! the registration step lists.

use super::templates;
use super::{writer, ComponentPlan, ModuleContext, PlannedArtifact};
use crate::result::{FileKind, GenerationResult};

/// Directories and files the backend generator would produce
#[must_use]
pub fn plan(ctx: &ModuleContext) -> ComponentPlan {
    let root = &ctx.backend_root;
    let controllers = root.join("Http").join("Controllers");
    let requests = root.join("Http").join("Requests");
    let resources = root.join("Http").join("Resources");
    let services = root.join("Services");
    let providers = root.join("Providers");
    let routes = root.join("routes");
    let p = &ctx.pascal;

    let mut directories = vec![
        root.clone(),
        controllers.clone(),
        requests.clone(),
        services.clone(),
        providers.clone(),
        routes.clone(),
    ];
    let mut files = vec![
        PlannedArtifact::new(
            controllers.join(format!("{p}Controller.php")),
            FileKind::Controller,
            templates::controller,
        ),
        PlannedArtifact::new(
            services.join(format!("{p}Service.php")),
            FileKind::Service,
            templates::service,
        ),
        PlannedArtifact::new(
            requests.join(format!("Store{p}Request.php")),
            FileKind::Request,
            templates::store_request,
        ),
        PlannedArtifact::new(
            requests.join(format!("Update{p}Request.php")),
            FileKind::Request,
            templates::update_request,
        ),
    ];
    if ctx.resource {
        directories.push(resources.clone());
        files.push(PlannedArtifact::new(
            resources.join(format!("{p}Resource.php")),
            FileKind::Resource,
            templates::resource,
        ));
    }
    files.push(PlannedArtifact::new(
        providers.join(format!("{p}ServiceProvider.php")),
        FileKind::Provider,
        templates::provider,
    ));
    files.push(PlannedArtifact::new(
        routes.join("web.php"),
        FileKind::Routes,
        templates::routes,
    ));

    ComponentPlan {
        component: "backend",
        directories,
        files,
    }
}

/// Write the backend skeleton, recording every outcome on `result`
pub fn generate(ctx: &ModuleContext, result: &mut GenerationResult) {
    tracing::info!(module = %ctx.pascal, root = %ctx.backend_root.display(), "generating backend");
    result.info(format!(
        "Generating backend for {} in {}",
        ctx.pascal,
        ctx.backend_root.display()
    ));
    writer::execute(&plan(ctx), ctx, result);
}
