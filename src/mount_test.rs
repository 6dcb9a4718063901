use super::*;

#[test]
fn resolve_host_returns_found_element() {
    let host = resolve_host("chat-widget-root", |id| (id == "chat-widget-root").then_some(7));
    assert_eq!(host, Ok(7));
}

#[test]
fn resolve_host_reports_missing_id() {
    let host = resolve_host::<()>("chat-widget-root", |_| None);
    assert_eq!(host, Err(InitError::MissingHost("chat-widget-root".to_owned())));
}

#[test]
fn missing_host_message_names_the_element() {
    let err = InitError::MissingHost("chat-widget-root".to_owned());
    assert_eq!(err.to_string(), "required element #chat-widget-root not found");
}

#[test]
fn claim_mount_succeeds_once() {
    let flag = AtomicBool::new(false);
    assert_eq!(claim_mount(&flag), Ok(()));
    assert_eq!(claim_mount(&flag), Err(InitError::AlreadyMounted));
}
