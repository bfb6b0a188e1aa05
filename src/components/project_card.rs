//! Project Card Component
//!
//! One cell of the listing grid, rendered from a precomputed view-model.

use leptos::prelude::*;

use crate::media::ProjectCardVm;

#[component]
pub fn ProjectCard(vm: ProjectCardVm) -> impl IntoView {
    let ProjectCardVm {
        anchor_id,
        href,
        title,
        author,
        title_attr,
        alt,
        src,
        data_src,
        data_srcset,
        win_year,
        average,
    } = vm;

    view! {
        <a id=anchor_id class="grid-cell ratio centered" href=href title=title_attr>
            <figure>
                <img
                    class="project-cover lazyload"
                    src=src
                    data-src=data_src
                    data-srcset=data_srcset
                    data-sizes="auto"
                    loading="lazy"
                    alt=alt
                />
                <figcaption class="d-flex-column">
                    {title.map(|title| view! { <h3 class="project-title">{title}</h3> })}
                    {author.map(|author| view! { <div class="subtitle owner-name">{author}</div> })}
                    <div class="extra d-flex justify-between">
                        {win_year.map(|year| view! {
                            <div class="portfolio-award d-flex">
                                <svg class="award"><use_ href="#award-icon"></use_></svg>
                                <span>{year}</span>
                            </div>
                        })}
                        {average.map(|average| view! {
                            <div class="portfolio-rate d-flex">
                                <span>{average}</span>
                                <svg class="rate-star"><use_ href="#star-icon"></use_></svg>
                            </div>
                        })}
                    </div>
                </figcaption>
            </figure>
        </a>
    }
}
