//! Proptest strategies for service catalogs.
//!
//! Names, domains and data entities are drawn from small pools so that
//! generated catalogs actually collide: shared domains, shared data and
//! dependencies that resolve to other services in the same catalog.

use crate::core::{
    DependencyType, InterfaceType, ServiceBoundary, ServiceDependency, ServiceInterface,
};
use proptest::prelude::*;

const DOMAINS: &[&str] = &["brand", "content", "listing", "billing", ""];
const FEATURE_WORDS: &[&str] = &[
    "brand voice",
    "content calendar",
    "listing editor",
    "billing export",
    "image resizing",
    "search ranking",
    "brand",
    "listing",
];
const ENTITIES: &[&str] = &["brand", "listing", "invoice", "user", "asset"];

pub fn interface_type_strategy() -> impl Strategy<Value = InterfaceType> {
    prop_oneof![
        Just(InterfaceType::Rest),
        Just(InterfaceType::Graphql),
        Just(InterfaceType::Grpc),
        Just(InterfaceType::MessageQueue),
        Just(InterfaceType::EventStream),
    ]
}

pub fn dependency_type_strategy() -> impl Strategy<Value = DependencyType> {
    prop_oneof![
        Just(DependencyType::Synchronous),
        Just(DependencyType::Asynchronous),
        Just(DependencyType::EventDriven),
    ]
}

fn pick(pool: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(pool).prop_map(str::to_string)
}

/// A boundary whose id and name are filled in by [`catalog_strategy`].
fn boundary_body_strategy(max_services: usize) -> impl Strategy<Value = ServiceBoundary> {
    (
        pick(DOMAINS),
        prop::collection::vec(pick(FEATURE_WORDS), 0..9),
        prop::collection::vec("[a-z]{3,8}", 0..7),
        prop::collection::vec(interface_type_strategy(), 0..4),
        prop::collection::vec((0..max_services, dependency_type_strategy()), 0..4),
        prop::collection::vec(pick(ENTITIES), 0..3),
    )
        .prop_map(
            |(domain, features, responsibilities, interfaces, dependencies, mut data)| {
                data.sort();
                data.dedup();
                ServiceBoundary {
                    id: String::new(),
                    name: String::new(),
                    domain,
                    features,
                    responsibilities,
                    interfaces: interfaces.into_iter().map(ServiceInterface::new).collect(),
                    dependencies: dependencies
                        .into_iter()
                        .map(|(target, kind)| {
                            ServiceDependency::new(format!("service-{}", target), kind)
                        })
                        .collect(),
                    data_ownership: data,
                    metrics: None,
                }
            },
        )
}

/// Catalogs of up to `max_services` boundaries with unique ids.
pub fn catalog_strategy(max_services: usize) -> impl Strategy<Value = Vec<ServiceBoundary>> {
    prop::collection::vec(boundary_body_strategy(max_services), 0..=max_services).prop_map(
        |bodies| {
            bodies
                .into_iter()
                .enumerate()
                .map(|(i, body)| ServiceBoundary {
                    id: format!("svc-{}", i),
                    name: format!("service-{}", i),
                    ..body
                })
                .collect()
        },
    )
}
