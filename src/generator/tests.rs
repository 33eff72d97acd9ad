#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use chrono::TimeZone;
use std::fs;
use std::path::Path;

const PROVIDERS: &str = "<?php\n\nreturn [\n    App\\Providers\\AppServiceProvider::class,\n];\n";

fn project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("bootstrap")).unwrap();
    fs::write(dir.path().join("bootstrap/providers.php"), PROVIDERS).unwrap();
    dir
}

fn generator(root: &Path) -> ModuleGenerator {
    ModuleGenerator::new(Layout::new(root, ScaffoldConfig::default()))
}

fn context(name: &str, options: &OptionSet) -> ModuleContext {
    let layout = Layout::new("/srv/app", ScaffoldConfig::default());
    let ids = normalize(name).unwrap();
    let started = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 5).unwrap();
    ModuleContext::new(&layout, &ids, plan(options), started)
}

#[test]
fn test_context_derivations() {
    let ctx = context("OrderItem", &OptionSet::default());
    assert_eq!(ctx.pascal, "OrderItem");
    assert_eq!(ctx.kebab, "order-item");
    assert_eq!(ctx.camel, "orderItem");
    assert_eq!(ctx.table, "order_items");
    assert_eq!(ctx.namespace, "App\\Modules\\OrderItem");
    assert_eq!(ctx.route_prefix, "/order-item");
    assert_eq!(ctx.migration_timestamp, "2026_10_19_083005");
    assert_eq!(
        ctx.backend_root,
        PathBuf::from("/srv/app/app/Modules/OrderItem")
    );
}

#[test]
fn test_sample_routes_have_single_binding() {
    let ctx = context("Billing", &OptionSet::default());
    let routes = templates::routes(&ctx).unwrap();
    assert_eq!(routes.matches("[BillingController::class").count(), 1);
    assert!(routes.contains("->get('/billing'"));
    assert!(routes.contains("->name('billing.index')"));
}

#[test]
fn test_full_routes_have_crud_set() {
    let ctx = context("Invoice", &OptionSet::full());
    let routes = templates::routes(&ctx).unwrap();
    assert_eq!(routes.matches("[InvoiceController::class").count(), 7);
    for action in ["index", "create", "store", "show", "edit", "update", "destroy"] {
        assert!(
            routes.contains(&format!("'{action}'])->name('{action}')")),
            "missing {action}"
        );
    }
    assert!(routes.contains("->prefix('invoice')"));
}

#[test]
fn test_controller_actions_follow_full_flag() {
    let sample = templates::controller(&context("Billing", &OptionSet::default())).unwrap();
    assert!(sample.contains("namespace App\\Modules\\Billing\\Http\\Controllers;"));
    assert!(sample.contains("public function index("));
    assert!(!sample.contains("public function store("));
    assert!(!sample.contains("BillingResource"));

    let full = templates::controller(&context("Invoice", &OptionSet::full())).unwrap();
    assert!(full.contains("public function destroy(int $id)"));
    assert!(full.contains("InvoiceResource::collection"));
}

#[test]
fn test_provider_loads_migrations_only_when_flagged() {
    let plain = templates::provider(&context("Billing", &OptionSet::default())).unwrap();
    assert!(plain.contains("class BillingServiceProvider extends ServiceProvider"));
    assert!(plain.contains("loadRoutesFrom(__DIR__.'/../routes/web.php')"));
    assert!(!plain.contains("loadMigrationsFrom"));

    let with_migration = templates::provider(&context(
        "Billing",
        &OptionSet {
            migration: true,
            ..OptionSet::default()
        },
    ))
    .unwrap();
    assert!(with_migration.contains("loadMigrationsFrom"));
}

#[test]
fn test_migration_uses_plural_table() {
    let ctx = context("Category", &OptionSet::full());
    let migration = templates::migration(&ctx).unwrap();
    assert!(migration.contains("Schema::create('categories'"));
    assert!(migration.contains("Schema::dropIfExists('categories')"));
}

#[test]
fn test_model_and_seeder_reference_factory_when_present() {
    let ctx = context("Invoice", &OptionSet::full());
    let model = templates::model(&ctx).unwrap();
    assert!(model.contains("use HasFactory;"));
    assert!(model.contains("protected $table = 'invoices';"));
    let seeder = templates::seeder(&ctx).unwrap();
    assert!(seeder.contains("Invoice::factory()->count(10)->create();"));

    let bare = context(
        "Invoice",
        &OptionSet {
            model: true,
            seeder: true,
            ..OptionSet::default()
        },
    );
    assert!(!templates::model(&bare).unwrap().contains("HasFactory"));
    assert!(templates::seeder(&bare).unwrap().contains("// Seed invoices here."));
}

#[test]
fn test_frontend_templates_use_identifiers() {
    let ctx = context("CRMSystem", &OptionSet::full());
    let types = templates::types(&ctx).unwrap();
    assert!(types.contains("export interface CRMSystem {"));
    let table = templates::table(&ctx).unwrap();
    assert!(table.contains("import { crmSystemActions } from '../actions/crmSystemActions';"));
    assert!(table.contains("`/crm-system/${item.id}/edit`"));
    let hook = templates::hook(&ctx).unwrap();
    assert!(hook.contains("export function useCRMSystem(page = 1)"));
    let sample = templates::sample_page(&ctx).unwrap();
    assert!(sample.contains("<Head title=\"Crm System\" />"));
}

#[test]
fn test_backend_plan_contents() {
    let plain = backend::plan(&context("Billing", &OptionSet::default()));
    let names: Vec<_> = plain
        .files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "BillingController.php",
            "BillingService.php",
            "StoreBillingRequest.php",
            "UpdateBillingRequest.php",
            "BillingServiceProvider.php",
            "web.php",
        ]
    );

    let with_resource = backend::plan(&context(
        "Billing",
        &OptionSet {
            resource: true,
            ..OptionSet::default()
        },
    ));
    assert!(with_resource
        .files
        .iter()
        .any(|f| f.kind == FileKind::Resource));
}

#[test]
fn test_frontend_plan_sample_vs_full() {
    let sample = frontend::plan(&context("Billing", &OptionSet::default()));
    assert_eq!(sample.directories.len(), 5);
    let pages = sample.files.iter().filter(|f| f.kind == FileKind::Page).count();
    assert_eq!(pages, 1);
    assert!(sample.files.iter().any(|f| f.kind == FileKind::Types));

    let full = frontend::plan(&context("Invoice", &OptionSet::full()));
    let pages = full.files.iter().filter(|f| f.kind == FileKind::Page).count();
    assert_eq!(pages, 4);
    assert_eq!(
        full.files
            .iter()
            .filter(|f| f.kind == FileKind::Component)
            .count(),
        2
    );
    assert!(full.files.iter().any(|f| f.kind == FileKind::Hook));
    assert!(full.files.iter().any(|f| f.kind == FileKind::Action));
}

#[test]
fn test_database_plan_is_gated_per_flag() {
    assert!(database::plan(&context("Billing", &OptionSet::default()))
        .files
        .is_empty());

    let only_factory = database::plan(&context(
        "Billing",
        &OptionSet {
            factory: true,
            ..OptionSet::default()
        },
    ));
    let kinds: Vec<_> = only_factory.files.iter().map(|f| f.kind).collect();
    assert_eq!(kinds, [FileKind::Factory]);

    let full = database::plan(&context("Invoice", &OptionSet::full()));
    let kinds: Vec<_> = full.files.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        [
            FileKind::Model,
            FileKind::Migration,
            FileKind::Factory,
            FileKind::Seeder
        ]
    );
    let migration = &full.files[1].path;
    assert!(migration
        .to_string_lossy()
        .ends_with("Database/Migrations/2026_10_19_083005_create_invoices_table.php"));
}

#[test]
fn test_existing_migration_is_reused_as_target() {
    let dir = project();
    let gen = generator(dir.path());
    let options = OptionSet {
        migration: true,
        ..OptionSet::default()
    };
    let first = gen.generate("Invoice", &options);
    assert!(first.is_successful(), "{:?}", first.errors());

    let second = gen.generate("Invoice", &options);
    let migrations = dir.path().join("app/Modules/Invoice/Database/Migrations");
    assert_eq!(fs::read_dir(&migrations).unwrap().count(), 1);
    assert!(second
        .errors()
        .iter()
        .any(|m| m.text.contains("_create_invoices_table.php")));
}

#[test]
fn test_invalid_name_produces_single_error_and_nothing_on_disk() {
    let dir = project();
    let result = generator(dir.path()).generate("--", &OptionSet::full());
    assert_eq!(result.messages().len(), 1);
    assert_eq!(result.errors().len(), 1);
    assert!(result.module().is_none());
    assert!(result.created_files().is_empty());
    assert!(!dir.path().join("app").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("bootstrap/providers.php")).unwrap(),
        PROVIDERS
    );
}

#[test]
fn test_preview_writes_nothing() {
    let dir = project();
    let plan = generator(dir.path())
        .preview("Invoice", &OptionSet::full())
        .unwrap();
    assert_eq!(plan.components.len(), 3);
    assert_eq!(plan.files().count(), 7 + 9 + 4);
    assert_eq!(
        plan.provider_reference,
        "App\\Modules\\Invoice\\Providers\\InvoiceServiceProvider::class"
    );
    assert!(!dir.path().join("app").exists());
    assert!(generator(dir.path())
        .preview("", &OptionSet::default())
        .is_err());
}
