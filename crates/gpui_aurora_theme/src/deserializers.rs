use gpui::SharedString;
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

pub fn de_color<'de, D>(deserializer: D) -> Result<SharedString, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    match trimmed_color(value) {
        Some(color) => Ok(color),
        None => Err(D::Error::custom("color value can't be empty.")),
    }
}

pub fn de_optional_color<'de, D>(deserializer: D) -> Result<Option<SharedString>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => match trimmed_color(value) {
            Some(color) => Ok(Some(color)),
            None => Err(D::Error::custom("color value can't be empty.")),
        },
    }
}

pub fn de_string_or_list<'de, D>(deserializer: D) -> Result<SmallVec<[SharedString; 4]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(SharedString),
        Many(SmallVec<[SharedString; 4]>),
    }

    let value = StringOrVec::deserialize(deserializer)?;

    match value {
        StringOrVec::One(string) => {
            let mut tags = SmallVec::new();
            tags.push(string);
            Ok(tags)
        }
        StringOrVec::Many(vec) => {
            if vec.iter().any(|tag| tag.trim().is_empty()) {
                return Err(D::Error::custom("tags can't be empty."));
            }

            Ok(vec)
        }
    }
}

fn trimmed_color(value: String) -> Option<SharedString> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.len() == value.len() {
        Some(value.into())
    } else {
        Some(trimmed.to_string().into())
    }
}
