use super::*;

fn unsupported() -> String {
    "Browser document APIs are only available when compiled for wasm32".to_string()
}

pub fn link_stylesheet(_href: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn find_element(_id: &str) -> Option<MountTarget> {
    None
}

pub async fn register_service_worker(
    config: &ServiceWorkerConfig,
) -> Result<ServiceWorkerStatus, String> {
    if !config.enabled {
        return Ok(ServiceWorkerStatus::Disabled);
    }
    Ok(ServiceWorkerStatus::Unsupported)
}

pub async fn unregister_service_worker() -> Result<bool, String> {
    Ok(false)
}
