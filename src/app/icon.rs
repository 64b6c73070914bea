use leptos::prelude::*;

/// Maps an `set:name` icon id to its icon font classes, e.g. `mdi:web` to
/// `mdi mdi-web`. Ids without a set prefix are taken as classes already.
pub fn icon_class(name: &str) -> String {
    match name.split_once(':') {
        Some((set, icon)) if !set.is_empty() && !icon.is_empty() => format!("{set} {set}-{icon}"),
        _ => name.to_string(),
    }
}

#[component]
pub fn Icon(#[prop(into)] name: String, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <i class=format!("{} {class}", icon_class(&name)) aria-hidden="true"></i> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_class() {
        assert_eq!(icon_class("mdi:web"), "mdi mdi-web");
        assert_eq!(icon_class("mdi:arrow-right"), "mdi mdi-arrow-right");
        assert_eq!(icon_class("devicon-rust-plain colored"), "devicon-rust-plain colored");
        assert_eq!(icon_class("mdi:"), "mdi:");
    }
}
