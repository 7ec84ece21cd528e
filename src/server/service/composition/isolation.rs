//! Per-section fault isolation.
//!
//! Runs one section through its adapter and converts every failure, including a panic
//! inside the adapter, into an omitted outcome. A section moves from pending to loading
//! to either rendered or omitted; there is no retry.

use std::{any::Any, panic::AssertUnwindSafe};

use futures::FutureExt;

use crate::server::{
    error::composition::SectionFault,
    model::{render::SectionOutcome, section::SectionRef},
    service::composition::{adapter::SectionContext, registry::SectionRegistry},
};

/// Hydrates a single section without letting its failure escape.
///
/// # Arguments
/// - `registry` - Registry used to find the adapter for the section's tag
/// - `ctx` - Shared request context passed to the adapter
/// - `section` - The section reference to hydrate
///
/// # Returns
/// - `SectionOutcome::Rendered` - Adapter produced a hydrated section
/// - `SectionOutcome::Omitted` - Unknown type, missing payload, adapter error or panic
pub async fn isolate(
    registry: &SectionRegistry,
    ctx: &SectionContext<'_>,
    section: SectionRef,
) -> SectionOutcome {
    let result = match registry.lookup(&section.section_tag) {
        Ok(adapter) => AssertUnwindSafe(adapter.load(ctx, section.payload_id))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(SectionFault::AdapterFault(panic_message(&*panic)))),
        Err(fault) => Err(fault),
    };

    match result {
        Ok(hydrated) => SectionOutcome::Rendered { section, hydrated },
        Err(reason) => {
            tracing::warn!(
                "Omitting section {} ({}) at position {}: {}",
                section.id,
                section.section_tag,
                section.position,
                reason
            );

            SectionOutcome::Omitted { section, reason }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        format!("panic: {}", message)
    } else if let Some(message) = panic.downcast_ref::<String>() {
        format!("panic: {}", message)
    } else {
        "panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_str_and_string_panics() {
        let str_panic: Box<dyn Any + Send> = Box::new("boom");
        let string_panic: Box<dyn Any + Send> = Box::new(String::from("kaboom"));
        let other_panic: Box<dyn Any + Send> = Box::new(42_u8);

        assert_eq!(panic_message(&*str_panic), "panic: boom");
        assert_eq!(panic_message(&*string_panic), "panic: kaboom");
        assert_eq!(panic_message(&*other_panic), "panic");
    }
}
