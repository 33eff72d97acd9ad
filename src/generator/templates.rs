use askama::Template;

use super::ModuleContext;
use crate::error::ScaffoldError;

/// Renders one artifact's contents from the module context
pub type Renderer = fn(&ModuleContext) -> Result<String, ScaffoldError>;

fn render<T: Template>(template: &'static str, data: &T) -> Result<String, ScaffoldError> {
    data.render()
        .map_err(|source| ScaffoldError::Render { template, source })
}

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

/// HTTP controller; full mode adds the CRUD actions
#[derive(Template)]
#[template(path = "backend/controller.php.txt", escape = "none")]
pub struct ControllerTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

/// Service class the controller delegates to
#[derive(Template)]
#[template(path = "backend/service.php.txt", escape = "none")]
pub struct ServiceTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

#[derive(Template)]
#[template(path = "backend/store_request.php.txt", escape = "none")]
pub struct StoreRequestTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

#[derive(Template)]
#[template(path = "backend/update_request.php.txt", escape = "none")]
pub struct UpdateRequestTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

/// API resource transformer (only with `resource`)
#[derive(Template)]
#[template(path = "backend/resource.php.txt", escape = "none")]
pub struct ResourceTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

/// Startup-registration unit: the service provider listed in the registration file
#[derive(Template)]
#[template(path = "backend/provider.php.txt", escape = "none")]
pub struct ProviderTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

/// Route table: one sample route, or the full CRUD set
#[derive(Template)]
#[template(path = "backend/routes.php.txt", escape = "none")]
pub struct RoutesTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

pub(crate) fn controller(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("backend/controller.php.txt", &ControllerTemplate { ctx })
}

pub(crate) fn service(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("backend/service.php.txt", &ServiceTemplate { ctx })
}

pub(crate) fn store_request(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("backend/store_request.php.txt", &StoreRequestTemplate { ctx })
}

pub(crate) fn update_request(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("backend/update_request.php.txt", &UpdateRequestTemplate { ctx })
}

pub(crate) fn resource(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("backend/resource.php.txt", &ResourceTemplate { ctx })
}

pub(crate) fn provider(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("backend/provider.php.txt", &ProviderTemplate { ctx })
}

pub(crate) fn routes(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("backend/routes.php.txt", &RoutesTemplate { ctx })
}

// ---------------------------------------------------------------------------
// Frontend
// ---------------------------------------------------------------------------

/// Entity interface, form-data type and pagination envelope
#[derive(Template)]
#[template(path = "frontend/types.ts.txt", escape = "none")]
pub struct TypesTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

/// The single page emitted outside full mode
#[derive(Template)]
#[template(path = "frontend/sample_page.tsx.txt", escape = "none")]
pub struct SamplePageTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

#[derive(Template)]
#[template(path = "frontend/index_page.tsx.txt", escape = "none")]
pub struct IndexPageTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

#[derive(Template)]
#[template(path = "frontend/create_page.tsx.txt", escape = "none")]
pub struct CreatePageTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

#[derive(Template)]
#[template(path = "frontend/edit_page.tsx.txt", escape = "none")]
pub struct EditPageTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

#[derive(Template)]
#[template(path = "frontend/show_page.tsx.txt", escape = "none")]
pub struct ShowPageTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

#[derive(Template)]
#[template(path = "frontend/table.tsx.txt", escape = "none")]
pub struct TableTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

#[derive(Template)]
#[template(path = "frontend/form.tsx.txt", escape = "none")]
pub struct FormTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

/// Data-fetching hook for the listing endpoint
#[derive(Template)]
#[template(path = "frontend/hook.ts.txt", escape = "none")]
pub struct HookTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

/// create/update/destroy helpers wrapping the Inertia router
#[derive(Template)]
#[template(path = "frontend/actions.ts.txt", escape = "none")]
pub struct ActionsTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

pub(crate) fn types(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("frontend/types.ts.txt", &TypesTemplate { ctx })
}

pub(crate) fn sample_page(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("frontend/sample_page.tsx.txt", &SamplePageTemplate { ctx })
}

pub(crate) fn index_page(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("frontend/index_page.tsx.txt", &IndexPageTemplate { ctx })
}

pub(crate) fn create_page(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("frontend/create_page.tsx.txt", &CreatePageTemplate { ctx })
}

pub(crate) fn edit_page(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("frontend/edit_page.tsx.txt", &EditPageTemplate { ctx })
}

pub(crate) fn show_page(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("frontend/show_page.tsx.txt", &ShowPageTemplate { ctx })
}

pub(crate) fn table(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("frontend/table.tsx.txt", &TableTemplate { ctx })
}

pub(crate) fn form(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("frontend/form.tsx.txt", &FormTemplate { ctx })
}

pub(crate) fn hook(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("frontend/hook.ts.txt", &HookTemplate { ctx })
}

pub(crate) fn actions(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("frontend/actions.ts.txt", &ActionsTemplate { ctx })
}

// ---------------------------------------------------------------------------
// Database
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "database/model.php.txt", escape = "none")]
pub struct ModelTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

#[derive(Template)]
#[template(path = "database/migration.php.txt", escape = "none")]
pub struct MigrationTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

#[derive(Template)]
#[template(path = "database/factory.php.txt", escape = "none")]
pub struct FactoryTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

#[derive(Template)]
#[template(path = "database/seeder.php.txt", escape = "none")]
pub struct SeederTemplate<'a> {
    pub ctx: &'a ModuleContext,
}

pub(crate) fn model(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("database/model.php.txt", &ModelTemplate { ctx })
}

pub(crate) fn migration(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("database/migration.php.txt", &MigrationTemplate { ctx })
}

pub(crate) fn factory(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("database/factory.php.txt", &FactoryTemplate { ctx })
}

pub(crate) fn seeder(ctx: &ModuleContext) -> Result<String, ScaffoldError> {
    render("database/seeder.php.txt", &SeederTemplate { ctx })
}
