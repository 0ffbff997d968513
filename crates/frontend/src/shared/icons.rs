use leptos::prelude::*;

/// Иконка размером 20px
pub fn icon(name: &str) -> AnyView {
    icon_sized(name, 20)
}

/// Иконка по имени. Неизвестное имя даёт запасной глиф, а не ошибку.
pub fn icon_sized(name: &str, size: u32) -> AnyView {
    let glyph = glyph(name);
    view! {
        <svg width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {glyph}
        </svg>
    }
    .into_any()
}

fn glyph(name: &str) -> AnyView {
    match name {
        "building" => view! {
            <path d="M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z"/>
            <path d="M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2"/>
            <path d="M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2"/>
            <path d="M10 6h4"/>
            <path d="M10 10h4"/>
            <path d="M10 14h4"/>
            <path d="M10 18h4"/>
        }.into_any(),
        "lightbulb" => view! {
            <path d="M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5"/>
            <path d="M9 18h6"/>
            <path d="M10 22h4"/>
        }.into_any(),
        "file-check" => view! {
            <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/>
            <path d="M14 2v4a2 2 0 0 0 2 2h4"/>
            <path d="m9 15 2 2 4-4"/>
        }.into_any(),
        "ruler" => view! {
            <path d="M21.3 15.3a2.4 2.4 0 0 1 0 3.4l-2.6 2.6a2.4 2.4 0 0 1-3.4 0L2.7 8.7a2.41 2.41 0 0 1 0-3.4l2.6-2.6a2.41 2.41 0 0 1 3.4 0Z"/>
            <path d="m14.5 12.5 2-2"/>
            <path d="m11.5 9.5 2-2"/>
            <path d="m8.5 6.5 2-2"/>
            <path d="m17.5 15.5 2-2"/>
        }.into_any(),
        "calendar" => view! {
            <rect x="3" y="4" width="18" height="18" rx="2"/>
            <path d="M16 2v4"/>
            <path d="M8 2v4"/>
            <path d="M3 10h18"/>
        }.into_any(),
        "map-pin" => view! {
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/>
            <circle cx="12" cy="10" r="3"/>
        }.into_any(),
        "maximize" => view! {
            <polyline points="15 3 21 3 21 9"/>
            <polyline points="9 21 3 21 3 15"/>
            <path d="M21 3l-7 7"/>
            <path d="M3 21l7-7"/>
        }.into_any(),
        "instagram" => view! {
            <rect x="2" y="2" width="20" height="20" rx="5" ry="5"/>
            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/>
            <path d="M17.5 6.5h.01"/>
        }.into_any(),
        "linkedin" => view! {
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>
            <rect x="2" y="9" width="4" height="12"/>
            <circle cx="4" cy="4" r="2"/>
        }.into_any(),
        "mail" => view! {
            <rect x="2" y="4" width="20" height="16" rx="2"/>
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>
        }.into_any(),
        "phone" => view! {
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>
        }.into_any(),
        "send" => view! {
            <path d="m22 2-7 20-4-9-9-4Z"/>
            <path d="M22 2 11 13"/>
        }.into_any(),
        "arrow-left" => view! {
            <path d="m12 19-7-7 7-7"/>
            <path d="M19 12H5"/>
        }.into_any(),
        "arrow-right" => view! {
            <path d="M5 12h14"/>
            <path d="m12 5 7 7-7 7"/>
        }.into_any(),
        "check-circle" => view! {
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/>
            <path d="m9 11 3 3L22 4"/>
        }.into_any(),
        "star" => view! {
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>
        }.into_any(),
        "chevron-left" => view! {
            <polyline points="15 18 9 12 15 6"/>
        }.into_any(),
        "chevron-right" => view! {
            <polyline points="9 18 15 12 9 6"/>
        }.into_any(),
        _ => view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 8v4l3 3"/>
        }.into_any(),
    }
}
