use yew::prelude::*;

/// Subtitle eyebrow plus an underlined heading, centered by default.
#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub subtitle: &'static str,
    pub title: &'static str,
    #[prop_or(true)]
    pub centered: bool,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class={classes!("section-title", (!props.centered).then(|| "left-aligned"))}>
            <span class="section-subtitle">{ props.subtitle }</span>
            <h2>{ props.title }</h2>
        </div>
    }
}
