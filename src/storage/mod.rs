use crate::filters::SortKey;

pub(crate) const SORT_KEY: &str = "sharebox_sort";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_string_from_storage(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub(crate) fn save_string_to_storage(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Stored values that no longer name a sort key fall back to the default.
pub(crate) fn sort_from_stored(value: Option<&str>) -> SortKey {
    value.and_then(SortKey::parse).unwrap_or_default()
}

pub(crate) fn load_sort_preference() -> SortKey {
    sort_from_stored(load_string_from_storage(SORT_KEY).as_deref())
}

pub(crate) fn save_sort_preference(key: SortKey) {
    save_string_to_storage(SORT_KEY, key.as_ref());
}
