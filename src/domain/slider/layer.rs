// SPDX-License-Identifier: MPL-2.0
//! Layer and layer-stack types.

use crate::error::{Result, StackError};
use crate::media::ImageData;

/// One ordered image entry managed by the comparator.
///
/// Immutable after construction; the stack order defines reveal order
/// (layer 0 fully visible at the left extreme, the last layer at the right).
#[derive(Debug, Clone)]
pub struct Layer {
    id: String,
    image: ImageData,
    label: Option<String>,
}

impl Layer {
    #[must_use]
    pub fn new(id: impl Into<String>, image: ImageData, label: Option<String>) -> Self {
        Self {
            id: id.into(),
            image,
            label,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn image(&self) -> &ImageData {
        &self.image
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Validated, ordered collection of at least two layers, all conformed to
/// the first layer's resolution.
#[derive(Debug, Clone)]
pub struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    /// Minimum number of layers a comparison needs.
    pub const MIN_LAYERS: usize = 2;

    /// Builds a stack, failing fast when fewer than two layers are supplied
    /// or a layer has no pixels. Layers whose dimensions differ from the
    /// first layer's are resized to match.
    pub fn new(layers: Vec<Layer>) -> Result<Self> {
        if layers.len() < Self::MIN_LAYERS {
            return Err(StackError::NotEnoughLayers {
                provided: layers.len(),
            }
            .into());
        }

        for layer in &layers {
            if layer.image.width == 0 || layer.image.height == 0 {
                return Err(StackError::EmptyImage {
                    id: layer.id.clone(),
                }
                .into());
            }
        }

        let (width, height) = (layers[0].image.width, layers[0].image.height);
        let layers = layers
            .into_iter()
            .map(|layer| Layer {
                image: layer.image.conformed_to(width, height),
                id: layer.id,
                label: layer.label,
            })
            .collect();

        Ok(Self { layers })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of dividers between adjacent layers.
    #[must_use]
    pub fn divider_count(&self) -> usize {
        self.layers.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    /// Common pixel width of every layer.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.layers[0].image.width
    }

    /// Common pixel height of every layer.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.layers[0].image.height
    }

    /// Display label for layer `index`, falling back to "`fallback` N".
    #[must_use]
    pub fn label_or(&self, index: usize, fallback: &str) -> String {
        match self.layers.get(index).and_then(Layer::label) {
            Some(label) => label.to_string(),
            None => format!("{} {}", fallback, index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, value: u8) -> ImageData {
        ImageData::from_rgba(width, height, vec![value; (width * height * 4) as usize])
    }

    fn layer(id: &str, image: ImageData) -> Layer {
        Layer::new(id, image, None)
    }

    #[test]
    fn one_layer_is_a_configuration_error() {
        let result = LayerStack::new(vec![layer("plate", solid(4, 4, 0))]);
        match result {
            Err(crate::error::Error::Stack(StackError::NotEnoughLayers { provided })) => {
                assert_eq!(provided, 1);
            }
            other => panic!("expected NotEnoughLayers, got {other:?}"),
        }
    }

    #[test]
    fn zero_layers_is_a_configuration_error() {
        assert!(LayerStack::new(Vec::new()).is_err());
    }

    #[test]
    fn empty_image_is_rejected() {
        let result = LayerStack::new(vec![
            layer("plate", solid(4, 4, 0)),
            layer("comp", ImageData::from_rgba(0, 0, Vec::new())),
        ]);
        match result {
            Err(crate::error::Error::Stack(StackError::EmptyImage { id })) => {
                assert_eq!(id, "comp");
            }
            other => panic!("expected EmptyImage, got {other:?}"),
        }
    }

    #[test]
    fn two_layers_build_a_stack() {
        let stack = LayerStack::new(vec![
            layer("plate", solid(4, 4, 0)),
            layer("comp", solid(4, 4, 255)),
        ])
        .expect("two layers are valid");

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.divider_count(), 1);
        assert_eq!(stack.width(), 4);
        assert_eq!(stack.height(), 4);
    }

    #[test]
    fn mismatched_layers_are_conformed_to_the_first() {
        let stack = LayerStack::new(vec![
            layer("plate", solid(8, 4, 0)),
            layer("comp", solid(2, 2, 255)),
        ])
        .expect("stack builds");

        let comp = stack.get(1).unwrap();
        assert_eq!(comp.image().width, 8);
        assert_eq!(comp.image().height, 4);
    }

    #[test]
    fn label_falls_back_to_numbered_name() {
        let stack = LayerStack::new(vec![
            Layer::new("plate", solid(2, 2, 0), Some("Raw plate".into())),
            layer("comp", solid(2, 2, 255)),
        ])
        .unwrap();

        assert_eq!(stack.label_or(0, "Layer"), "Raw plate");
        assert_eq!(stack.label_or(1, "Layer"), "Layer 2");
    }
}
