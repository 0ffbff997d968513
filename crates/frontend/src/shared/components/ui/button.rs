use leptos::prelude::*;

/// Button component with variants (primary, outline, ghost) and sizes (sm, md, lg, icon)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "outline" or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default), "sm", "lg" or "icon"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let class_name = move || {
        button_class(
            variant.get().as_deref(),
            size.get().as_deref(),
            class.get().as_deref(),
        )
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button type=btn_type class=class_name>
            {children()}
        </button>
    }
}

/// CSS-классы кнопки. Используется и для ссылок, оформленных как кнопка.
pub fn button_class(variant: Option<&str>, size: Option<&str>, extra: Option<&str>) -> String {
    let variant_class = match variant.unwrap_or("primary") {
        "outline" => "button--outline",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    let size_class = match size.unwrap_or("md") {
        "sm" => "button--sm",
        "lg" => "button--lg",
        "icon" => "button--icon",
        _ => "",
    };

    let mut class = format!("button {}", variant_class);
    for part in [size_class, extra.unwrap_or_default()] {
        if !part.is_empty() {
            class.push(' ');
            class.push_str(part);
        }
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class() {
        assert_eq!(button_class(None, None, None), "button button--primary");
        assert_eq!(
            button_class(Some("outline"), Some("lg"), Some("hero__cta")),
            "button button--outline button--lg hero__cta"
        );
        assert_eq!(button_class(Some("unknown"), Some("icon"), None), "button button--primary button--icon");
    }
}
