//! Single forward pass that turns a document and its overlay into markup.

use log::debug;

use crate::overlay::Overlay;

/// Renders `document` with every tag of `overlay` inserted at its offset.
///
/// At each offset the closing tags come first, last-registered first, then
/// the opening tags in registration order. Offsets beyond the end of the
/// document are clamped to it. Document bytes are copied verbatim.
pub fn render(document: &[u8], overlay: &Overlay<'_>) -> Vec<u8> {
    let mut out = Vec::with_capacity(document.len() + overlay.len() * 8);
    let mut markup = String::new();
    let mut cursor = 0usize;

    for (offset, slot) in overlay.iter() {
        let offset = offset.clamp(cursor, document.len());
        out.extend_from_slice(&document[cursor..offset]);

        markup.clear();
        for tag in slot.closing.iter().rev() {
            tag.write_to(&mut markup);
        }
        for tag in &slot.opening {
            tag.write_to(&mut markup);
        }
        out.extend_from_slice(markup.as_bytes());

        cursor = offset;
    }
    out.extend_from_slice(&document[cursor..]);

    debug!(
        "Rendered {} tag offset(s). Original length: {}, rendered length: {}",
        overlay.len(),
        document.len(),
        out.len()
    );
    out
}
