use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Fit {
    #[default]
    Cover,
    Contain,
    Fill,
}

impl Fit {
    pub fn as_css(self) -> &'static str {
        match self {
            Fit::Cover => "cover",
            Fit::Contain => "contain",
            Fit::Fill => "fill",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PictureProps {
    #[props(into)]
    src: String,
    #[props(into)]
    alt: String,
    #[props(default)]
    width: Option<u32>,
    #[props(default)]
    height: Option<u32>,
    #[props(default)]
    fit: Fit,
    /// Stretch over the nearest positioned ancestor instead of using the
    /// intrinsic size.
    #[props(default)]
    fill: bool,
    #[props(into, default)]
    class: String,
}

pub fn picture_style(fit: Fit, fill: bool) -> String {
    if fill {
        format!(
            "object-fit: {}; position: absolute; inset: 0; width: 100%; height: 100%;",
            fit.as_css()
        )
    } else {
        format!("object-fit: {};", fit.as_css())
    }
}

#[component]
pub fn Picture(props: PictureProps) -> Element {
    let style = picture_style(props.fit, props.fill);

    rsx! {
        img {
            class: "{props.class}",
            src: "{props.src}",
            alt: "{props.alt}",
            width: props.width.map(|w| w.to_string()),
            height: props.height.map(|h| h.to_string()),
            loading: "lazy",
            decoding: "async",
            style: "{style}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intrinsic_pictures_only_set_fit() {
        assert_eq!(picture_style(Fit::Cover, false), "object-fit: cover;");
        assert_eq!(picture_style(Fit::Contain, false), "object-fit: contain;");
    }

    #[test]
    fn fill_pictures_cover_their_parent() {
        let style = picture_style(Fit::Cover, true);
        assert!(style.starts_with("object-fit: cover;"));
        assert!(style.contains("inset: 0;"));
        assert!(style.contains("width: 100%;"));
    }
}
