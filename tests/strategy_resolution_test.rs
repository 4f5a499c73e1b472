//! Tests for strategy resolution
//!
//! Declarations on a grouping apply to the grouping and everything nested in
//! it unless a nested class declares its own; unknown or broken custom
//! generators surface as configuration errors at resolution time.

mod common;

use common::helpers::{assert_configuration_error, assert_error_contains, assert_invalid_input};
use display_name_mcp::config::registry::GeneratorRegistry;
use display_name_mcp::config::resolver::StrategyResolver;
use display_name_mcp::config::{Declaration, GenerationConfig};
use display_name_mcp::entity::{ClassInfo, MethodInfo};
use display_name_mcp::naming::{DisplayNameGenerator, Strategy, Style};
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

fn stack_hierarchy() -> (ClassInfo, ClassInfo, ClassInfo) {
    let stack = ClassInfo::top_level("com.example.StackTests");
    let when_new = ClassInfo::nested(stack.clone(), "WhenNew");
    let after_push = ClassInfo::nested(when_new.clone(), "AfterPush");
    (stack, when_new, after_push)
}

#[test]
fn test_no_declaration_resolves_to_default() {
    // Given: An empty configuration
    let resolver = StrategyResolver::default();
    let (_, _, after_push) = stack_hierarchy();

    // When/Then: Everything resolves to DEFAULT
    assert_eq!(
        resolver.resolve_class(&after_push).unwrap(),
        Strategy::Builtin(Style::Default)
    );
    assert_eq!(
        resolver.resolve_declaration(None).unwrap(),
        resolver
            .resolve_declaration(Some(&Declaration::Style(Style::Default)))
            .unwrap()
    );
}

#[test]
fn test_nested_classes_inherit_enclosing_declaration() {
    // Given: SENTENCES declared on the outermost class only
    let config = GenerationConfig::default().declare("com.example.StackTests", Style::Sentences);
    let resolver = StrategyResolver::new(config);
    let (stack, when_new, after_push) = stack_hierarchy();

    // Then: The declaration reaches every nesting level
    for class in [&stack, &when_new, &after_push] {
        assert_eq!(
            resolver.resolve_class(class).unwrap(),
            Strategy::Builtin(Style::Sentences),
            "{}",
            class.qualified_name
        );
    }
}

#[test]
fn test_nested_declaration_overrides_enclosing() {
    // Given: SENTENCES on the outer class, CAMEL_CASE on the middle one
    let config = GenerationConfig::default()
        .declare("com.example.StackTests", Style::Sentences)
        .declare("com.example.StackTests.WhenNew", Style::CamelCase);
    let resolver = StrategyResolver::new(config);
    let (stack, when_new, after_push) = stack_hierarchy();

    // Then: The nearest declaration wins
    assert_eq!(
        resolver.resolve_class(&stack).unwrap(),
        Strategy::Builtin(Style::Sentences)
    );
    assert_eq!(
        resolver.resolve_class(&when_new).unwrap(),
        Strategy::Builtin(Style::CamelCase)
    );
    assert_eq!(
        resolver.nested_class_name(&after_push).unwrap(),
        "After Push"
    );
}

#[test]
fn test_config_default_applies_without_grouping() {
    let config = GenerationConfig::default()
        .with_default(Style::Underscore)
        .declare("com.example.Other", Style::CamelCase);
    let resolver = StrategyResolver::new(config);

    let class = ClassInfo::top_level("com.example.my_tests");

    assert_eq!(resolver.class_name(&class).unwrap(), "my tests");
}

#[test]
fn test_method_resolves_through_declaring_class() {
    let config = GenerationConfig::default().declare("com.example.Outer", Style::Sentences);
    let resolver = StrategyResolver::new(config);
    let method = MethodInfo::new("shouldWork", common::outer_inner());

    assert_eq!(resolver.method_name(&method).unwrap(), "Inner shouldWork.");
}

struct Bracketed;

impl DisplayNameGenerator for Bracketed {
    fn name_for_class(&self, class: &ClassInfo) -> String {
        format!("[{}]", class.simple_name)
    }

    fn name_for_nested_class(&self, class: &ClassInfo) -> String {
        format!("[[{}]]", class.simple_name)
    }

    fn name_for_method(&self, method: &MethodInfo) -> String {
        format!("<{}>", method.name)
    }
}

#[test]
fn test_custom_generator_declaration_resolves_from_registry() {
    // Given: A grouping declaring a registered custom generator
    let mut registry = GeneratorRegistry::new();
    registry.register("reports::Bracketed", Bracketed).unwrap();
    let config = GenerationConfig::from_json_str(
        r#"{"groupings": {"com.example.Outer": {"generator": "reports::Bracketed"}}}"#,
    )
    .unwrap();
    let resolver = StrategyResolver::new(config).with_registry(registry);

    // When: A nested class and a method in it are named
    let inner = common::outer_inner();
    let method = MethodInfo::new("works", inner.clone());

    // Then: The custom generator produced both
    assert_eq!(resolver.nested_class_name(&inner).unwrap(), "[[Inner]]");
    assert_eq!(resolver.method_name(&method).unwrap(), "<works>");
    assert_eq!(resolver.resolve_class(&inner).unwrap().id(), "reports::Bracketed");
}

#[test]
fn test_unregistered_generator_is_configuration_error() {
    let config = GenerationConfig::default()
        .declare("com.example.Outer", Declaration::Generator("reports::Missing".to_string()));
    let resolver = StrategyResolver::new(config);
    let inner = common::outer_inner();

    assert_configuration_error(resolver.resolve_class(&inner), "unregistered generator");
    assert_configuration_error(resolver.nested_class_name(&inner), "unregistered generator");
}

#[test]
fn test_unregistered_generator_fails_declaration_check() {
    // Given: A configuration naming a generator nobody registered
    let config = GenerationConfig::from_json_str(
        r#"{"groupings": {"com.example.Outer": {"generator": "nope::Missing"}}}"#,
    )
    .unwrap();
    let resolver = StrategyResolver::new(config);

    // When: The declarations are checked, before any name is generated
    let err = resolver.validate_declarations().unwrap_err();

    // Then: The broken reference is reported as a configuration error
    assert_error_contains(&err.to_string(), "nope::Missing", "declaration check");
    assert_configuration_error(resolver.validate_declarations(), "declaration check");
}

#[test]
fn test_declaration_check_covers_config_default() {
    let config = GenerationConfig::default()
        .declare("com.example.Outer", Style::Sentences)
        .with_default(Declaration::Generator("reports::Missing".to_string()));
    let resolver = StrategyResolver::new(config);

    assert_configuration_error(resolver.validate_declarations(), "default declaration");
}

#[test]
fn test_declaration_check_accepts_resolvable_config() {
    let mut registry = GeneratorRegistry::new();
    registry.register("reports::Bracketed", Bracketed).unwrap();
    let config = GenerationConfig::default()
        .with_default(Style::CamelCase)
        .declare("com.example.Outer", Declaration::Generator("reports::Bracketed".to_string()))
        .declare("com.example.Other", Style::Underscore);
    let resolver = StrategyResolver::new(config).with_registry(registry);

    assert!(resolver.validate_declarations().is_ok());
    assert!(StrategyResolver::default().validate_declarations().is_ok());
}

#[test]
fn test_malformed_input_is_reported_before_broken_declaration() {
    // Given: A broken declaration covering every class
    let config = GenerationConfig::default()
        .with_default(Declaration::Generator("reports::Missing".to_string()));
    let resolver = StrategyResolver::new(config);

    // When: Malformed metadata is named
    let class = ClassInfo::top_level("com.example.");
    let method = MethodInfo::new(" ", ClassInfo::top_level("com.example.Tests"));

    // Then: The input is rejected first
    assert_invalid_input(resolver.class_name(&class), "class with trailing dot");
    assert_invalid_input(resolver.nested_class_name(&class), "nested class with trailing dot");
    assert_invalid_input(resolver.method_name(&method), "blank method name");
}

#[test]
fn test_malformed_generator_id_is_configuration_error() {
    let config = GenerationConfig::default().with_default(Declaration::Generator(
        "not a path".to_string(),
    ));
    let resolver = StrategyResolver::new(config);

    let result = resolver.resolve_class(&ClassInfo::top_level("a.Tests"));

    assert_configuration_error(result, "malformed generator id");
}

#[test]
fn test_non_instantiable_generator_is_configuration_error() {
    // Given: A factory that cannot build its generator
    let mut registry = GeneratorRegistry::new();
    registry
        .register_factory("reports::NeedsTemplate", || {
            Err(eyre::eyre!("template file not found"))
        })
        .unwrap();
    let config = GenerationConfig::default().with_default(Declaration::Generator(
        "reports::NeedsTemplate".to_string(),
    ));
    let resolver = StrategyResolver::new(config).with_registry(registry);

    // When: Resolving any class
    let err = resolver
        .resolve_class(&ClassInfo::top_level("a.Tests"))
        .unwrap_err();

    // Then: The factory failure is reported, nothing is defaulted
    assert_error_contains(&err.to_string(), "template file not found", "factory failure");
    assert_error_contains(&err.to_string(), "reports::NeedsTemplate", "factory failure");
}

#[test]
fn test_factory_generator_is_built_per_resolution() {
    let mut registry = GeneratorRegistry::new();
    registry
        .register_factory("reports::Fresh", || {
            let generator: Arc<dyn DisplayNameGenerator> = Arc::new(Style::CamelCase);
            Ok(generator)
        })
        .unwrap();
    let resolver = StrategyResolver::default().with_registry(registry);

    let strategy = resolver
        .resolve_declaration(Some(&Declaration::Generator("reports::Fresh".to_string())))
        .unwrap();

    assert_eq!(strategy.id(), "reports::Fresh");
}

#[test]
fn test_config_file_drives_resolution() -> eyre::Result<()> {
    // Given: A configuration file on disk
    let dir = tempdir()?;
    let path = dir.path().join("display-names.json");
    fs::write(
        &path,
        r#"{
            "default": {"style": "camel_case"},
            "groupings": {"com.example.Outer": {"style": "sentences"}}
        }"#,
    )?;

    // When: The resolver is built from it
    let resolver = StrategyResolver::new(GenerationConfig::from_file(&path)?);

    // Then: Both the grouping and the default are honored
    let method = MethodInfo::new("shouldWork", common::outer_inner());
    assert_eq!(resolver.method_name(&method)?, "Inner shouldWork.");
    assert_eq!(
        resolver.class_name(&ClassInfo::top_level("com.example.OtherTests"))?,
        "Other Tests"
    );
    Ok(())
}

