use std::time::Duration;

use leptos::prelude::*;

use crate::core::blob::{BlobAnchor, BlobColor, BlobSize, blob_class, blob_style};

/// Blurred decorative shape drifting in the background
#[component]
pub fn FloatingBlob(
    #[prop(default = BlobSize::Medium)] size: BlobSize,
    #[prop(default = BlobColor::Primary)] color: BlobColor,
    #[prop(default = BlobAnchor::TopLeft)] anchor: BlobAnchor,
    /// Offset into the float loop so neighbouring blobs drift out of phase
    #[prop(default = Duration::ZERO)]
    delay: Duration,
) -> impl IntoView {
    view! {
        <div class=blob_class(size, color, anchor) style=blob_style(delay) aria-hidden="true"></div>
    }
}
