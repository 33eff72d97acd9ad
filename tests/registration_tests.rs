use modforge::{patch_registration, GenerationResult, OptionSet, PatchOutcome, RegistrationOutcome, RegistrationPatcher};

mod common;
use common::project::{Project, PROVIDERS};

#[test]
fn test_modules_are_appended_in_order() {
    let project = Project::new();
    let generator = project.generator();
    for name in ["Billing", "Invoice", "order item"] {
        assert!(generator.generate(name, &OptionSet::default()).is_successful());
    }
    assert_eq!(
        project.providers(),
        "<?php\n\nreturn [\n    App\\Providers\\AppServiceProvider::class,\n    \
         App\\Modules\\Billing\\Providers\\BillingServiceProvider::class,\n    \
         App\\Modules\\Invoice\\Providers\\InvoiceServiceProvider::class,\n    \
         App\\Modules\\OrderItem\\Providers\\OrderItemServiceProvider::class,\n];\n"
    );
}

#[test]
fn test_existing_formatting_is_preserved() {
    let original = "<?php\n\n// Providers loaded at boot.\n\nreturn [\n    App\\Providers\\AppServiceProvider::class,\n    App\\Providers\\EventServiceProvider::class,\n\n    // Feature modules\n];\n";
    let project = Project::with_providers(original);
    let result = project.generator().generate("Billing", &OptionSet::default());
    assert!(result.is_successful(), "{:#?}", result.errors());

    let patched = project.providers();
    let (head, _) = original.rsplit_once("];").unwrap();
    assert!(patched.starts_with(head.trim_end()));
    assert!(patched.ends_with(
        "    // Feature modules\n    App\\Modules\\Billing\\Providers\\BillingServiceProvider::class,\n];\n"
    ));
}

#[test]
fn test_repair_of_hand_edited_list() {
    let project = Project::with_providers(
        "<?php\n\nreturn [\n    App\\Providers\\AppServiceProvider::class,, App\\Providers\\EventServiceProvider::class\n];\n",
    );
    let result = project.generator().generate("Billing", &OptionSet::default());
    assert!(result.is_successful(), "{:#?}", result.errors());
    assert_eq!(
        project.providers(),
        "<?php\n\nreturn [\n    App\\Providers\\AppServiceProvider::class,\n    \
         App\\Providers\\EventServiceProvider::class,\n    \
         App\\Modules\\Billing\\Providers\\BillingServiceProvider::class,\n];\n"
    );
}

#[test]
fn test_malformed_registration_file_is_reported() {
    let project = Project::with_providers("<?php\n\nreturn [\n");
    let result = project.generator().generate("Billing", &OptionSet::default());
    assert!(!result.is_successful());
    assert_eq!(result.errors().len(), 1);
    assert!(result.errors()[0].text.contains("no closing `];`"));
    assert_eq!(project.providers(), "<?php\n\nreturn [\n");
    assert_eq!(result.created_files().len(), 8);
}

#[test]
fn test_patcher_is_idempotent_on_disk() {
    let project = Project::new();
    let reference = "App\\Modules\\Billing\\Providers\\BillingServiceProvider::class";
    let patcher = RegistrationPatcher::new(project.path("bootstrap/providers.php"));
    assert_eq!(patcher.path(), project.path("bootstrap/providers.php"));

    let mut result = GenerationResult::new();
    assert_eq!(patcher.register(reference, &mut result), RegistrationOutcome::Registered);
    let once = project.providers();
    for _ in 0..3 {
        assert_eq!(
            patcher.register(reference, &mut result),
            RegistrationOutcome::AlreadyRegistered
        );
        assert_eq!(project.providers(), once);
    }
    assert_eq!(result.warnings().len(), 3);
    assert_eq!(once.matches(reference).count(), 1);
    assert_eq!(patch_registration(&once, reference), PatchOutcome::AlreadyRegistered);
}

#[test]
fn test_pure_patch_matches_file_patch() {
    let reference = "App\\Modules\\Billing\\Providers\\BillingServiceProvider::class";
    let PatchOutcome::Patched(expected) = patch_registration(PROVIDERS, reference) else {
        panic!("expected a patch");
    };
    let project = Project::new();
    project.generator().generate("Billing", &OptionSet::default());
    assert_eq!(project.providers(), expected);
}

#[test]
fn test_last_entry_with_trailing_comment() {
    let project = Project::with_providers(
        "<?php\n\nreturn [\n    App\\Providers\\AppServiceProvider::class // core\n];\n",
    );
    let result = project.generator().generate("Billing", &OptionSet::default());
    assert!(result.is_successful(), "{:#?}", result.errors());
    assert_eq!(
        project.providers(),
        "<?php\n\nreturn [\n    App\\Providers\\AppServiceProvider::class, // core\n    \
         App\\Modules\\Billing\\Providers\\BillingServiceProvider::class,\n];\n"
    );
}
