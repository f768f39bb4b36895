use crate::ServiceConfig;

pub fn initiate_default_values(mut config: ServiceConfig) -> ServiceConfig {
    // base url is joined with resource paths that start with '/'
    let base_url = config.api.base_url.trim().trim_end_matches('/').to_owned();
    config.api.base_url = base_url;
    config.auth.url = config.auth.url.trim().to_owned();

    let mut logging = config.settings.logging.take().unwrap_or_default();
    // empty env expansion means "no file"
    if logging
        .file
        .as_ref()
        .filter(|path| path.as_os_str().is_empty())
        .is_some()
    {
        logging.file = None;
    }
    logging.level = logging.level.trim().to_lowercase();
    config.settings.logging = Some(logging);

    config
}
