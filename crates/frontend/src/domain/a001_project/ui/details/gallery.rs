use super::view_model::ProjectDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Главное изображение и лента миниатюр
#[component]
pub fn ProjectGallery(vm: ProjectDetailsViewModel) -> impl IntoView {
    let project = vm.project;
    let has_many = project.gallery.len() > 1;

    view! {
        <div class="gallery">
            <div class="gallery__main">
                <img src=move || vm.current_image() alt=project.title />
                <Show when=move || has_many>
                    <button
                        type="button"
                        class="gallery__nav gallery__nav--prev"
                        aria-label="Предыдущее изображение"
                        on:click=move |_| vm.previous_image()
                    >
                        {icon("chevron-left")}
                    </button>
                    <button
                        type="button"
                        class="gallery__nav gallery__nav--next"
                        aria-label="Следующее изображение"
                        on:click=move |_| vm.next_image()
                    >
                        {icon("chevron-right")}
                    </button>
                </Show>
            </div>

            <div class="gallery__thumbs">
                {project
                    .gallery
                    .iter()
                    .enumerate()
                    .map(|(index, image)| {
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if vm.is_selected(index) {
                                        "gallery__thumb gallery__thumb--active"
                                    } else {
                                        "gallery__thumb"
                                    }
                                }
                                aria-label=project.image_alt(index)
                                on:click=move |_| vm.select_image(index)
                            >
                                <img src=*image alt=project.image_alt(index) loading="lazy" />
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
