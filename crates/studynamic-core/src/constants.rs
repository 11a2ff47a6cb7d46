/// Backend route component constants shared across crates.
///
/// The configured base URL carries the `/api` prefix; per-resource routes
/// are appended to it.
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const SUBJECTS_ROUTE_COMPONENT: &str = "subjects";
pub const SUBJECTS_ROUTE: &str = const_str::concat!("/", SUBJECTS_ROUTE_COMPONENT);

pub const SCHEDULES_ROUTE_COMPONENT: &str = "subjectschedules";
pub const SCHEDULES_ROUTE: &str = const_str::concat!("/", SCHEDULES_ROUTE_COMPONENT);

pub const TASKS_ROUTE_COMPONENT: &str = "tasks";
pub const TASKS_ROUTE: &str = const_str::concat!("/", TASKS_ROUTE_COMPONENT);

pub const EVENTS_ROUTE_COMPONENT: &str = "events";
pub const EVENTS_ROUTE: &str = const_str::concat!("/", EVENTS_ROUTE_COMPONENT);
