use ordcoll_keyed::{
    resolve, CollectionError, CollectionSection, ElementKey, KeyedCollection, KeyedElement,
    SectionOptions, TrustedAssembly,
};
use ordcoll_test_utils::{
    assembly, assembly_key, assembly_names, create_test_assemblies, init_tracing, machine_section,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_duplicate_add_scenario() {
    init_tracing();
    let mut collection = KeyedCollection::new();
    collection.add(assembly("A", "1")).unwrap();

    let err = collection.add(assembly("A", "1")).unwrap_err();
    assert_eq!(err, CollectionError::DuplicateKey { key: "A/1".into() });
    assert_eq!(collection.len(), 1);
}

#[test]
fn test_position_and_key_address_same_element() {
    let collection = create_test_assemblies();
    let key = assembly_key("System.Data", "2.0.0.0");

    let index = collection.index_of_key(&key).unwrap();
    assert_eq!(collection.get(index).unwrap(), collection.get_by_key(&key).unwrap());
}

#[test]
fn test_remove_updates_positions() {
    let mut collection = create_test_assemblies();
    collection
        .remove_by_key(&assembly_key("System.Web", "2.0.0.0"))
        .unwrap();

    assert_eq!(
        collection.index_of_key(&assembly_key("Contoso.Reports", "1.4")),
        Some(1)
    );
    assert!(collection
        .remove_by_key(&assembly_key("System.Web", "2.0.0.0"))
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_clear_is_unconditional() {
    let mut collection = create_test_assemblies();
    collection.clear();
    assert!(collection.is_empty());
    collection.clear();
    assert!(collection.is_empty());
}

#[test]
fn test_custom_element_type() {
    #[derive(Debug, Clone, PartialEq)]
    struct Endpoint {
        host: String,
        port: u16,
    }

    impl KeyedElement for Endpoint {
        fn key(&self) -> ElementKey {
            ElementKey::pair(self.host.as_str(), self.port.to_string())
        }
    }

    let mut endpoints = KeyedCollection::new();
    endpoints
        .add(Endpoint {
            host: "db".into(),
            port: 5432,
        })
        .unwrap();
    let err = endpoints
        .add(Endpoint {
            host: "db".into(),
            port: 5432,
        })
        .unwrap_err();
    assert!(err.is_duplicate());
}

#[test]
fn test_layered_resolution_from_yaml() {
    init_tracing();
    let site: CollectionSection<TrustedAssembly> = CollectionSection::from_yaml(
        r#"
directives:
  - remove: { key: "System.Data/2.0.0.0" }
  - add: { assemblyName: Contoso.Reports, version: "1.4" }
"#,
    )
    .unwrap();

    let effective = resolve(&[machine_section(), site]).unwrap();
    assert_eq!(
        assembly_names(&effective),
        vec!["System.Web".to_string(), "Contoso.Reports".to_string()]
    );
}

#[test]
fn test_layered_resolution_rejects_shadowing() {
    let app = CollectionSection::new().add(assembly("System.Web", "2.0.0.0"));
    let err = resolve(&[machine_section(), app]).unwrap_err();
    assert!(err
        .as_collection_error()
        .is_some_and(CollectionError::is_duplicate));
}

#[test]
fn test_strict_section_from_json() {
    let section: CollectionSection<TrustedAssembly> = CollectionSection::from_json(
        r#"{"options":{"strictRemove":true},"directives":[{"remove":{"key":"Missing/1"}}]}"#,
    )
    .unwrap();
    assert_eq!(section.options, SectionOptions::new().with_strict_remove(true));
    assert!(section.build().is_err());
}

#[test]
fn test_section_yaml_round_trip() {
    let section = machine_section().remove(assembly_key("Old", "0.1")).clear();
    let yaml = section.to_yaml().unwrap();
    assert!(yaml.contains("- add:"));
    assert!(!yaml.contains("!add"));
    let back: CollectionSection<TrustedAssembly> = CollectionSection::from_yaml(&yaml).unwrap();
    assert_eq!(back, section);
}

proptest! {
    #[test]
    fn prop_equal_keys_always_collide(name in "[A-Za-z.]{1,12}", version in "[0-9.]{1,8}") {
        let mut collection = KeyedCollection::new();
        collection.add(TrustedAssembly::new(name.clone(), version.clone())).unwrap();
        let second = collection.add(TrustedAssembly::new(name, version));
        prop_assert!(second.unwrap_err().is_duplicate());
        prop_assert_eq!(collection.len(), 1);
    }

    #[test]
    fn prop_key_text_round_trips(parts in prop::collection::vec(".{0,6}", 1..4)) {
        let key = ElementKey::from_parts(parts).unwrap();
        let parsed: ElementKey = key.to_string().parse().unwrap();
        prop_assert_eq!(parsed, key);
    }

    #[test]
    fn prop_split_point_never_collides(text in "[a-z]{2,10}", split in any::<prop::sample::Index>()) {
        let at = 1 + split.index(text.len() - 1);
        let other = if at + 1 < text.len() { at + 1 } else { at - 1 };
        prop_assume!(other != 0 && other != at);

        let a = ElementKey::pair(&text[..at], &text[at..]);
        let b = ElementKey::pair(&text[..other], &text[other..]);
        prop_assert_ne!(a.to_string(), b.to_string());
        prop_assert_ne!(a, b);
    }
}
