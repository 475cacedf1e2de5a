use log::warn;
use yew::prelude::*;

use crate::config;

/// Company logo with a text fallback. Each instance tracks its own load
/// failure, so the header and footer logos degrade independently.
#[derive(Properties, PartialEq)]
pub struct BrandLogoProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(BrandLogo)]
pub fn brand_logo(props: &BrandLogoProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| {
            warn!("logo image failed to load, falling back to text");
            failed.set(true);
        })
    };

    html! {
        <div class={classes!("brand-logo", props.class.clone())}>
            {
                if *failed {
                    html! {
                        <div class="brand-fallback">
                            <span class="brand-name">
                                {"ZINAT "}<span class="brand-accent">{"AL RUH"}</span>
                            </span>
                            <span class="brand-strapline">{ config::STRAPLINE }</span>
                        </div>
                    }
                } else {
                    html! {
                        <img
                            src={config::LOGO_ASSET}
                            alt={config::COMPANY_NAME}
                            {onerror}
                        />
                    }
                }
            }
        </div>
    }
}
