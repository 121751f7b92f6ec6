//! Device identity helper
//!
//! The auth server binds OTP issuance and verification to a device. The device
//! identifier is a random UUID generated once per browser profile and kept in
//! `localStorage` under a fixed key; it is sent with every auth request.

use uuid::Uuid;

const DEVICE_ID_KEY: &str = "tableside_device_id";

/// Return the persisted device identifier, creating and storing one on first
/// use. Returns an empty string when no browser storage is available (e.g. a
/// non-browser execution context); that is a deliberate no-op fallback, not an
/// error.
pub fn get_or_create_device_id() -> String {
    #[cfg(feature = "web")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return String::new();
        };

        get_or_create_with(
            || storage.get_item(DEVICE_ID_KEY).ok().flatten(),
            // Storage write failures (e.g. quota) are not handled; the id is
            // simply regenerated next time.
            |id| {
                let _ = storage.set_item(DEVICE_ID_KEY, id);
            },
        )
    }

    #[cfg(not(feature = "web"))]
    String::new()
}

/// Generate a fresh device identifier: a version-4 UUID from the platform's
/// cryptographic RNG.
#[cfg_attr(not(feature = "web"), allow(dead_code))]
fn generate_device_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg_attr(not(feature = "web"), allow(dead_code))]
fn get_or_create_with(
    get: impl FnOnce() -> Option<String>,
    put: impl FnOnce(&str),
) -> String {
    if let Some(id) = get() {
        return id;
    }
    let id = generate_device_id();
    put(&id);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn generated_id_has_v4_shape() {
        let id = generate_device_id();
        let groups: Vec<&str> = id.split('-').collect();

        assert_eq!(
            groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12]
        );
        assert!(id
            .chars()
            .all(|c| c == '-' || c.is_ascii_hexdigit()));
        // Version nibble is fixed at 4, variant nibble in [89ab]
        assert!(groups[2].starts_with('4'));
        assert!(matches!(
            groups[3].chars().next(),
            Some('8' | '9' | 'a' | 'b')
        ));
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(generate_device_id(), generate_device_id());
    }

    #[test]
    fn id_is_stable_across_calls_against_one_store() {
        let store: RefCell<Option<String>> = RefCell::new(None);

        let first = get_or_create_with(
            || store.borrow().clone(),
            |id| *store.borrow_mut() = Some(id.to_string()),
        );
        let second = get_or_create_with(
            || store.borrow().clone(),
            |id| *store.borrow_mut() = Some(id.to_string()),
        );

        assert_eq!(first, second);
        assert_eq!(store.borrow().as_deref(), Some(first.as_str()));
    }

    #[test]
    fn existing_id_is_returned_unchanged() {
        let id = get_or_create_with(|| Some("existing-id".to_string()), |_| {
            panic!("must not overwrite an existing id")
        });
        assert_eq!(id, "existing-id");
    }
}
