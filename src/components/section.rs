use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    /// Anchor id the navbar scrolls to.
    pub id: &'static str,
    pub title: &'static str,
    /// Alternate (tinted) background tone.
    #[prop_or_default]
    pub alt: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Anchored content section: heading plus whatever the caller nests inside.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let heading_id = format!("{}-title", props.id);
    html! {
        <section
            id={props.id}
            class={classes!("section", props.alt.then(|| "section--alt"))}
            aria-labelledby={heading_id.clone()}
        >
            <div class="container">
                <h2 id={heading_id} class="section__title">{ props.title }</h2>
                <div class="section__content">
                    { for props.children.iter() }
                </div>
            </div>
        </section>
    }
}
