//! ProductImages widget: responsive image carousel.
//!
//! Each render resolves every image to the resolution band matching the
//! current viewport width. While mounted, the widget listens for viewport
//! resizes and, once resizing has settled for the debounce window, bumps its
//! [`RenderTrigger`] so the host renders again with the new width.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::watch;

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::image::{ImageAsset, SelectedImage};
use crate::reactive::RenderTrigger;
use crate::schema::{SchemaNode, UiWidget};
use crate::viewport::{Debouncer, ListenerId, ViewportProvider};
use crate::widget::traits::Widget;
use crate::widgets::options::{BgOpacity, Position, ThumbnailsOrientation, ZoomType};

// ---------------------------------------------------------------------------
// Props
// ---------------------------------------------------------------------------

/// Zoom behavior of the main image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoomProps {
    pub zoom_type: ZoomType,
    /// Backdrop opacity, only meaningful in gallery mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_opacity: Option<BgOpacity>,
}

/// Props accepted by [`ProductImages`], as stored by the page builder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductImagesProps {
    pub images: Vec<ImageAsset>,
    pub position: Position,
    pub zoom_props: ZoomProps,
    pub thumbnails_orientation: ThumbnailsOrientation,
    pub display_thumbnails_arrows: bool,
}

// ---------------------------------------------------------------------------
// Slide
// ---------------------------------------------------------------------------

/// One carousel slide as handed to the rendering host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub urls: Vec<String>,
    pub alt: String,
    pub thumb_url: String,
    pub best_url_index: usize,
}

impl Slide {
    fn from_asset(asset: &ImageAsset, viewport_width: u32) -> Self {
        Self {
            urls: asset.resolution_urls.clone(),
            alt: asset.alt_text.clone(),
            thumb_url: asset.thumbnail().to_owned(),
            best_url_index: asset.best_index(viewport_width),
        }
    }

    /// URL of the selected resolution.
    pub fn selected_url(&self) -> &str {
        &self.urls[self.best_url_index]
    }
}

// ---------------------------------------------------------------------------
// ProductImages
// ---------------------------------------------------------------------------

/// Product image carousel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductImages {
    props: ProductImagesProps,
}

impl ProductImages {
    pub fn new(props: ProductImagesProps) -> Self {
        Self { props }
    }

    /// Build from page-builder JSON; missing props take their defaults.
    ///
    /// Every image must carry one URL per resolution band, otherwise
    /// [`WidgetError::ResolutionMismatch`] is returned.
    pub fn from_json(props: Value) -> Result<Self, WidgetError> {
        let props: ProductImagesProps =
            serde_json::from_value(props).map_err(|e| WidgetError::InvalidProps(e.to_string()))?;
        props.images.iter().try_for_each(ImageAsset::validate)?;
        Ok(Self::new(props))
    }

    pub fn props(&self) -> &ProductImagesProps {
        &self.props
    }

    /// Replace the props for the next render pass.
    pub fn set_props(&mut self, props: ProductImagesProps) {
        self.props = props;
    }

    /// Slides for `viewport_width`, one per image.
    pub fn slides(&self, viewport_width: u32) -> Vec<Slide> {
        self.props
            .images
            .iter()
            .map(|image| Slide::from_asset(image, viewport_width))
            .collect()
    }

    /// The `{ selected_url, alt_text, thumbnail_url }` view of each image.
    pub fn selected_images(&self, viewport_width: u32) -> Vec<SelectedImage> {
        self.props
            .images
            .iter()
            .map(|image| image.select(viewport_width))
            .collect()
    }

    /// Admin schema for the given zoom mode.
    ///
    /// The backdrop opacity field only exists in gallery mode.
    pub fn admin_schema(zoom_type: ZoomType) -> SchemaNode {
        let mut zoom_props = SchemaNode::object("admin/editor.product-images.zoomOptions.title")
            .with_property(
                "zoomType",
                SchemaNode::string("admin/editor.product-images.zoomType.title")
                    .with_enum(
                        ZoomType::ALL.iter().map(|z| z.as_str()),
                        &[
                            "admin/editor.product-images.gallery",
                            "admin/editor.product-images.in-page",
                            "admin/editor.product-images.no-zoom",
                        ],
                    )
                    .with_widget(UiWidget::radio(false))
                    .with_default(ZoomType::NoZoom.as_str()),
            );
        if zoom_type == ZoomType::Gallery {
            zoom_props = zoom_props.with_property(
                "bgOpacity",
                SchemaNode::number("admin/editor.product-images.bgopacity.title")
                    .with_range(BgOpacity::MIN, BgOpacity::MAX, BgOpacity::STEP)
                    .with_default(BgOpacity::DEFAULT.get()),
            );
        }

        SchemaNode::object("admin/editor.product-images.title")
            .with_description("admin/editor.product-images.description")
            .with_property("zoomProps", zoom_props)
            .with_property(
                "thumbnailsOrientation",
                SchemaNode::string("admin/editor.product-images.thumbnailsOrientation.title")
                    .with_enum(
                        ThumbnailsOrientation::ALL.iter().map(|o| o.as_str()),
                        &[
                            "admin/editor.product-images.vertical",
                            "admin/editor.product-images.horizontal",
                        ],
                    )
                    .with_widget(UiWidget::radio(false))
                    .with_default(ThumbnailsOrientation::Vertical.as_str())
                    .with_layout(true),
            )
    }

    /// Start listening for viewport resizes.
    ///
    /// Must be called inside a tokio runtime, which runs the debounce timer.
    pub fn mount(
        self,
        viewport: Arc<dyn ViewportProvider>,
        config: &WidgetConfig,
    ) -> Result<MountedProductImages, WidgetError> {
        let trigger = Arc::new(RenderTrigger::new());
        let recompute_trigger = Arc::clone(&trigger);
        let debouncer = Arc::new(Debouncer::new(
            config.resize_debounce,
            Arc::new(move || {
                recompute_trigger.notify();
                tracing::trace!(epoch = recompute_trigger.epoch(), "recomputing product images");
            }),
        )?);

        let weak = Arc::downgrade(&debouncer);
        let listener = viewport.subscribe(Arc::new(move |width| {
            if let Some(debouncer) = weak.upgrade() {
                tracing::trace!(width, "viewport resize, scheduling recomputation");
                debouncer.call();
            }
        }));
        tracing::debug!(
            images = self.props.images.len(),
            width = viewport.width(),
            debounce_ms = config.resize_debounce.as_millis() as u64,
            "product images mounted"
        );

        Ok(MountedProductImages {
            widget: self,
            viewport,
            listener: Some(listener),
            debouncer,
            trigger,
        })
    }
}

impl Widget for ProductImages {
    fn widget_type(&self) -> &str {
        "ProductImages"
    }

    fn css_handles(&self) -> &'static [&'static str] {
        &["content"]
    }

    fn schema(&self) -> Option<SchemaNode> {
        Some(Self::admin_schema(self.props.zoom_props.zoom_type))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// MountedProductImages
// ---------------------------------------------------------------------------

/// A [`ProductImages`] subscribed to viewport resizes.
///
/// Dropping the handle unmounts: the resize listener is removed and any
/// pending recomputation is cancelled, so the trigger never fires afterwards.
pub struct MountedProductImages {
    widget: ProductImages,
    viewport: Arc<dyn ViewportProvider>,
    listener: Option<ListenerId>,
    debouncer: Arc<Debouncer>,
    trigger: Arc<RenderTrigger>,
}

impl MountedProductImages {
    pub fn widget(&self) -> &ProductImages {
        &self.widget
    }

    /// Replace the props; the subscription is kept.
    pub fn set_props(&mut self, props: ProductImagesProps) {
        self.widget.set_props(props);
    }

    /// Width the next render will use.
    pub fn viewport_width(&self) -> u32 {
        self.viewport.width()
    }

    /// Slides for the current viewport width.
    pub fn slides(&self) -> Vec<Slide> {
        self.widget.slides(self.viewport.width())
    }

    /// Selected images for the current viewport width.
    pub fn selected_images(&self) -> Vec<SelectedImage> {
        self.widget.selected_images(self.viewport.width())
    }

    /// Number of debounced recomputations so far.
    pub fn render_epoch(&self) -> u64 {
        self.trigger.epoch()
    }

    /// Receiver that changes whenever the host should render again.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.trigger.subscribe()
    }

    /// Whether a recomputation is waiting for the debounce window to close.
    pub fn is_recompute_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Stop listening and hand the widget back.
    pub fn unmount(mut self) -> ProductImages {
        self.teardown();
        std::mem::take(&mut self.widget)
    }

    fn teardown(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };
        self.debouncer.close();
        self.viewport.unsubscribe(listener);
        tracing::debug!(epoch = self.trigger.epoch(), "product images unmounted");
    }
}

impl Drop for MountedProductImages {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for MountedProductImages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedProductImages")
            .field("widget", &self.widget)
            .field("mounted", &self.is_mounted())
            .field("epoch", &self.trigger.epoch())
            .field("pending", &self.debouncer.is_pending())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
