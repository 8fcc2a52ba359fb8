//! Value providers for dynamic resources

use lwm2m_core::ResourceValue;

/// Source of a dynamic resource's current value
///
/// Invoked once per read or serialization. Providers are expected to return
/// immediately and to produce values of the resource's declared type.
#[cfg_attr(test, mockall::automock)]
pub trait ValueProvider {
    fn provide(&mut self) -> ResourceValue;
}

impl<F> ValueProvider for F
where
    F: FnMut() -> ResourceValue,
{
    fn provide(&mut self) -> ResourceValue {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_provider() {
        let mut counter = 0;
        let mut provider = move || {
            counter += 1;
            ResourceValue::Integer(counter)
        };
        assert_eq!(provider.provide(), ResourceValue::Integer(1));
        assert_eq!(provider.provide(), ResourceValue::Integer(2));
    }
}
