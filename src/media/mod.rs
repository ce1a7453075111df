// SPDX-License-Identifier: MPL-2.0
//! Media loading for layer images.

mod image;

pub use image::{load_image, load_stack, ImageData};
