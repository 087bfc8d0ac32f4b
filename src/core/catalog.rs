use super::constants::MEDIA_PATH_PATTERN;

/// One entry of the fixed sound list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundSpec {
    pub id: &'static str,
    pub display_name: &'static str,
}

pub static CATALOG: [SoundSpec; 8] = [
    SoundSpec {
        id: "rain",
        display_name: "Rain",
    },
    SoundSpec {
        id: "ocean",
        display_name: "Ocean",
    },
    SoundSpec {
        id: "cafe",
        display_name: "Café",
    },
    SoundSpec {
        id: "campfire",
        display_name: "Campfire",
    },
    SoundSpec {
        id: "wind",
        display_name: "Wind",
    },
    SoundSpec {
        id: "library",
        display_name: "Library",
    },
    SoundSpec {
        id: "forest",
        display_name: "Forest",
    },
    SoundSpec {
        id: "synthwave",
        display_name: "Synthwave",
    },
];

#[inline]
pub fn media_path(id: &str) -> String {
    MEDIA_PATH_PATTERN.replace("{}", id)
}

/// Element id of the page-provided `<audio>` for a sound, if any.
#[inline]
pub fn audio_element_id(id: &str) -> String {
    format!("audio-{id}")
}
