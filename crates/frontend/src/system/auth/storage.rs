use web_sys::window;

const OPERATOR_KEY: &str = "cms_operator_name";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save operator name to localStorage
pub fn save_operator(name: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(OPERATOR_KEY, name);
    }
}

/// Get operator name from localStorage
pub fn get_operator() -> Option<String> {
    get_local_storage()?
        .get_item(OPERATOR_KEY)
        .ok()?
        .filter(|name| !name.trim().is_empty())
}

/// Forget the operator; the backend connection stays configured
pub fn clear_operator() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(OPERATOR_KEY);
    }
}
