// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![cfg(feature = "serde")]

use pyxis_rect::Rect;

#[test]
fn rect_serializes_with_named_fields() {
    let r = Rect::new(1, -2, 3, -4);
    let json = serde_json::to_string(&r).unwrap();
    assert_eq!(json, r#"{"x":1,"y":-2,"width":3,"height":-4}"#);
    let back: Rect = serde_json::from_str(&json).unwrap();
    assert_eq!(back, r);
}
