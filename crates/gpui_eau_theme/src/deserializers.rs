use gpui::{Pixels, SharedString, px};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[SharedString; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(SharedString),
        Many(SmallVec<[SharedString; 1]>),
    }

    match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(vec) => {
            if vec.is_empty() {
                return Err(D::Error::custom("list can't be empty."));
            }

            Ok(vec)
        }
    }
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let Some(string) = string.strip_suffix("px") else {
                return Err(D::Error::custom("expected string to end with 'px'"));
            };

            match string.trim().parse::<f32>() {
                Ok(pixels) => Ok(px(pixels)),
                Err(_) => Err(D::Error::custom("could not convert string into pixels")),
            }
        }

        StringOrFloat::Float(pixels) => Ok(px(pixels)),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Length {
        #[serde(deserialize_with = "de_pixels")]
        value: Pixels,
    }

    #[derive(Deserialize)]
    struct Fonts {
        #[serde(deserialize_with = "de_string_or_non_empty_list")]
        family: SmallVec<[SharedString; 1]>,
    }

    #[test]
    fn test_pixels_from_number_and_string() {
        let number: Length = serde_json::from_str(r#"{ "value": 12 }"#).unwrap();
        assert_eq!(number.value, px(12.));

        let string: Length = serde_json::from_str(r#"{ "value": "7.5px" }"#).unwrap();
        assert_eq!(string.value, px(7.5));
    }

    #[test]
    fn test_pixels_rejects_missing_suffix() {
        let result = serde_json::from_str::<Length>(r#"{ "value": "12" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_font_family_forms() {
        let one: Fonts = serde_json::from_str(r#"{ "family": "Inter" }"#).unwrap();
        assert_eq!(one.family.len(), 1);

        let many: Fonts = serde_json::from_str(r#"{ "family": ["Inter", "Sans"] }"#).unwrap();
        assert_eq!(many.family[1], SharedString::from("Sans"));

        assert!(serde_json::from_str::<Fonts>(r#"{ "family": [] }"#).is_err());
    }
}
