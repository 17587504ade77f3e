//! Prints whether RevealBrush is available on this machine.

use std::sync::Arc;

use apicheck::{checks, install_metadata_service, MetadataQuery, QueryError};

/// Stand-in metadata system for machines without a WinRT activation
/// factory: reports every contract and every API as present.
struct EverythingPresent;

impl MetadataQuery for EverythingPresent {
    fn is_api_contract_present(&self, _contract: &str, _major: u16) -> Result<bool, QueryError> {
        Ok(true)
    }
    fn is_type_present(&self, _type_name: &str) -> Result<bool, QueryError> {
        Ok(true)
    }
    fn is_property_present(&self, _type_name: &str, _property: &str) -> Result<bool, QueryError> {
        Ok(true)
    }
    fn is_method_present(&self, _type_name: &str, _method: &str) -> Result<bool, QueryError> {
        Ok(true)
    }
    fn is_event_present(&self, _type_name: &str, _event: &str) -> Result<bool, QueryError> {
        Ok(true)
    }
    fn is_enum_value_present(&self, _enum_name: &str, _value: &str) -> Result<bool, QueryError> {
        Ok(true)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    install_metadata_service(Arc::new(EverythingPresent))
        .expect("metadata service installed twice");

    if checks::is_reveal_brush_available() {
        println!("Hooray! RevealBrush is available on your system.");
    } else {
        println!("Your version of Windows doesn't support RevealBrush. :(");
    }
}
