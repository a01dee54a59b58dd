//! `HtmlImageElement` asset loader

use std::cell::RefCell;
use std::rc::Rc;
use std::task::Poll;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlImageElement};

use super::tickets::{LoadState, LoadTable, SharedState};
use crate::assets::{AssetLoader, AssetTicket, LoadedImage};
use crate::error::AssetError;
use crate::renderer::FrameRecorder;

/// An image element and the callbacks attached to it.
///
/// Dropping it detaches the callbacks before freeing them.
struct ImageRequest {
    element: HtmlImageElement,
    _onload: Closure<dyn FnMut(Event)>,
    _onerror: Closure<dyn FnMut()>,
}

impl ImageRequest {
    fn start(url: &str, state: &SharedState) -> Result<Self, JsValue> {
        let element = HtmlImageElement::new()?;

        let onload = {
            let state = state.clone();
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let loaded = event
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlImageElement>().ok());
                *state.borrow_mut() = match loaded {
                    Some(image) => LoadState::Ready {
                        width: image.natural_width(),
                        height: image.natural_height(),
                    },
                    None => LoadState::Failed("load event without an image".into()),
                };
            })
        };
        element.set_onload(Some(onload.as_ref().unchecked_ref()));

        let onerror = {
            let state = state.clone();
            Closure::<dyn FnMut()>::new(move || {
                *state.borrow_mut() = LoadState::Failed("image failed to load".into());
            })
        };
        element.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        element.set_src(url);
        Ok(Self {
            element,
            _onload: onload,
            _onerror: onerror,
        })
    }
}

impl Drop for ImageRequest {
    fn drop(&mut self) {
        self.element.set_onload(None);
        self.element.set_onerror(None);
    }
}

/// Loads images through the browser and hands out recorder textures
pub struct ImageLoader {
    recorder: Rc<FrameRecorder>,
    table: LoadTable<Option<ImageRequest>>,
}

impl ImageLoader {
    pub fn new(recorder: Rc<FrameRecorder>) -> Self {
        Self {
            recorder,
            table: LoadTable::new(),
        }
    }
}

impl AssetLoader for ImageLoader {
    fn request(&mut self, url: &str) -> AssetTicket {
        let state = Rc::new(RefCell::new(LoadState::Loading));
        let request = match ImageRequest::start(url, &state) {
            Ok(request) => Some(request),
            Err(e) => {
                *state.borrow_mut() = LoadState::Failed(format!("{e:?}"));
                None
            }
        };

        let ticket = self.table.insert(url, state, request);
        log::debug!(
            "Requested image {url} as ticket {} ({} in flight)",
            ticket.0,
            self.table.len()
        );
        ticket
    }

    fn poll(&mut self, ticket: AssetTicket) -> Poll<Result<LoadedImage, AssetError>> {
        self.table.poll(ticket).map(|result| {
            result.map(|(width, height)| {
                LoadedImage::new(width, height).with_texture(self.recorder.texture(ticket.0))
            })
        })
    }
}
