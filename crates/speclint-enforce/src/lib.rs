//! Rule engine for speclint.
//!
//! Each rule walks the document on its own and appends violations to a
//! shared [`report::Report`]:
//! - `naming`: path segments, tags, operation ids, parameters, definitions, properties
//! - `noEmptyOperationId`: operations without an `operationId`
//! - `noEmptyDescriptions`: operations (and optionally parameters, properties) without a description
//! - `slashTerminatedPaths`: trailing-slash policy for path templates
//! - `requireOperationTags`: operations without tags
//! - `noUnusedDefinitions`: definitions no operation can reach
//! - `noDuplicateOperationIds`: repeated `operationId`s
//! - `noMissingRequiredProperties`: `required` names absent from `properties`

pub mod types;
pub mod naming;
pub mod report;
pub mod rules;
pub mod engine;
