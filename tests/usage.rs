//! Marker-driven processing of beans, through descriptors and the wrapper.

use std::collections::BTreeMap;

use vc_bean::derive::Bean;
use vc_bean::registry::DescriptorCache;
use vc_bean::{BeanErrorKind, BeanWrapper};

/// Marks string properties to convert to upper case.
struct UpperCase;

#[derive(Bean, Default)]
#[bean(default)]
struct Country {
    #[bean(@UpperCase)]
    code: String,
    name: Option<String>,
}

#[derive(Bean, Default)]
#[bean(default)]
struct Customer {
    #[bean(@UpperCase)]
    name: Option<String>,
    #[bean(@UpperCase)]
    city: String,
    note: String,
    country: Option<Country>,
    tags: BTreeMap<String, String>,
}

/// Upper-cases every marked string property of the wrapped bean.
fn apply_upper_case(wrapper: &mut BeanWrapper<'_>) {
    let descriptor = wrapper.descriptor().unwrap();
    for property in descriptor.iter() {
        if !property.markers().contains::<UpperCase>() {
            continue;
        }
        let value = wrapper
            .get_simple_value(property)
            .unwrap()
            .and_then(|value| value.downcast_ref::<String>())
            .map(|text| text.to_uppercase());
        if let Some(value) = value {
            wrapper.set_simple_value(property, value).unwrap();
        }
    }
}

#[test]
fn markers_drive_conversion() {
    let cache = DescriptorCache::new();
    let mut customer = Customer {
        name: Some(String::from("ada")),
        city: String::from("london"),
        note: String::from("keep"),
        ..Customer::default()
    };

    let mut wrapper = BeanWrapper::new(&cache, &mut customer);
    apply_upper_case(&mut wrapper);

    assert_eq!(customer.name.as_deref(), Some("ADA"));
    assert_eq!(customer.city, "LONDON");
    assert_eq!(customer.note, "keep");
}

#[test]
fn markers_on_nested_beans() {
    let cache = DescriptorCache::new();
    let mut customer = Customer::default();

    let mut wrapper = BeanWrapper::new(&cache, &mut customer);
    wrapper.set_value("country.code", "gb").unwrap();
    wrapper.set_value("country.name", "Great Britain").unwrap();

    let code = wrapper.get_property("country.code").unwrap().unwrap();
    assert!(code.markers().contains::<UpperCase>());
    let name = wrapper.get_property("country.name").unwrap().unwrap();
    assert!(!name.markers().contains::<UpperCase>());

    let mut country = wrapper.unwrap().downcast_mut::<Customer>().unwrap().country.take().unwrap();
    let mut nested = BeanWrapper::new(&cache, &mut country);
    apply_upper_case(&mut nested);

    assert_eq!(country.code, "GB");
    assert_eq!(country.name.as_deref(), Some("Great Britain"));
}

#[test]
fn descriptors_are_shared() {
    let cache = DescriptorCache::new();
    let mut first = Customer::default();
    let mut second = Customer::default();

    let a = BeanWrapper::new(&cache, &mut first).descriptor().unwrap();
    let b = BeanWrapper::new(&cache, &mut second).descriptor().unwrap();

    assert!(std::sync::Arc::ptr_eq(&a, &b));
    let names: Vec<_> = a.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["name", "city", "note", "country", "tags"]);
}

#[test]
fn mapped_and_failing_paths() {
    let cache = DescriptorCache::new();
    let mut customer = Customer::default();
    let mut wrapper = BeanWrapper::new(&cache, &mut customer);

    wrapper.set_value("tags[tier.level]", "gold").unwrap();
    let tier = wrapper.get_value_as::<String>("tags[tier.level]").unwrap();
    assert_eq!(tier.map(String::as_str), Some("gold"));

    let err = wrapper.get_value("country.name").unwrap_err();
    assert_eq!(err.kind(), BeanErrorKind::NullReference);

    wrapper.set_auto_instantiate(false);
    let err = wrapper.set_value("country.code", "fr").unwrap_err();
    assert_eq!(err.kind(), BeanErrorKind::NullReference);
    assert!(err.message().contains("country"));
}
