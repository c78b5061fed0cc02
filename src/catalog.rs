use indexmap::IndexMap;

/// Keyword catalog: category name -> ordered option strings.
///
/// Keys are case-insensitive-unique and stored lowercase; iteration order is
/// insertion order, which defines the default display order before ranking.
/// The catalog does no I/O; loading and saving belong to the store.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    keys: IndexMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new(map: IndexMap<String, Vec<String>>) -> Self {
        let mut keys = IndexMap::with_capacity(map.len());
        for (k, v) in map {
            keys.insert(k.to_lowercase(), v);
        }
        Catalog { keys }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All category keys with their option counts, in catalog order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, usize)> {
        self.keys.iter().map(|(k, v)| (k.as_str(), v.len()))
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(|k| k.as_str())
    }

    /// Category names starting with `prefix`, case-insensitively, in
    /// catalog order.
    pub fn matching(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.to_lowercase();
        self.keys
            .keys()
            .filter(|k| k.starts_with(&prefix))
            .map(|k| k.as_str())
            .collect()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.keys.contains_key(&category.to_lowercase())
    }

    /// Options of `category`; empty for unknown categories.
    pub fn options(&self, category: &str) -> &[String] {
        self.keys
            .get(&category.to_lowercase())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Atomic wholesale swap, used on external update notification.
    pub fn replace(&mut self, map: IndexMap<String, Vec<String>>) {
        *self = Catalog::new(map);
    }
}

/// Built-in catalog used when the store has no `keywords` entry.
pub fn default_catalog() -> Catalog {
    let mut keys = IndexMap::new();
    for (name, options) in DEFAULT_KEYWORDS {
        keys.insert(
            name.to_string(),
            options.iter().map(|s| s.to_string()).collect(),
        );
    }
    Catalog { keys }
}

const DEFAULT_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "color",
        &[
            "red", "blue", "green", "yellow", "purple", "orange", "pink", "brown", "gray",
            "black", "white", "cyan", "magenta", "turquoise", "lavender", "gold", "silver",
            "bronze", "vibrant", "muted", "pastel", "monochromatic", "sepia", "black and white",
            "neon", "iridescent", "metallic", "gradient", "duotone", "high contrast",
            "low contrast", "saturated", "desaturated", "warm colors", "cool colors",
            "primary colors", "complementary colors", "analogous colors", "earth tones",
            "jewel tones", "pastel rainbow", "fluorescent", "ombre",
        ],
    ),
    (
        "style",
        &[
            "impressionist", "surrealist", "abstract", "realistic", "minimalist", "cubist",
            "pop art", "art deco", "baroque", "rococo", "gothic", "renaissance", "cyberpunk",
            "steampunk", "futuristic", "vintage", "retro", "pastel", "monochromatic", "vibrant",
            "photorealistic", "pixel art", "vaporwave", "art nouveau", "romantic",
            "neoclassical", "futurism", "expressionist", "bohemian", "grunge", "kawaii", "noir",
            "psychedelic",
        ],
    ),
    (
        "mood",
        &[
            "calm", "energetic", "mysterious", "playful", "melancholic", "joyful", "tense",
            "serene", "dramatic", "whimsical", "nostalgic", "dreamy", "dark", "light",
            "chaotic", "peaceful", "eerie", "haunting", "intense", "ethereal", "somber",
            "hopeful", "foreboding", "bittersweet", "surreal", "apocalyptic", "tranquil",
            "rebellious",
        ],
    ),
    (
        "subject",
        &[
            "landscape", "portrait", "wildlife", "urban", "architecture", "fantasy", "sci-fi",
            "mythological", "nature", "technology", "space", "underwater", "cityscape",
            "animals", "plants",
        ],
    ),
    (
        "perspective",
        &[
            "bird's eye view", "worm's eye view", "close-up", "wide shot", "macro", "aerial",
            "ground level", "eye level", "over the shoulder", "symmetrical",
        ],
    ),
    (
        "lighting",
        &[
            "natural light", "soft light", "hard light", "backlighting", "spotlight", "neon",
            "candlelight", "sunlight", "moonlight", "twilight", "golden hour", "foggy",
            "shadowy", "soft lighting", "harsh lighting", "backlit", "rim lighting",
            "dramatic lighting", "cinematic lighting", "studio lighting", "low key lighting",
            "high key lighting", "blue hour", "volumetric lighting", "ambient lighting",
            "directional lighting", "diffused lighting", "overcast", "silhouette", "prismatic",
            "strobing", "underlit",
        ],
    ),
    (
        "composition",
        &[
            "rule of thirds", "golden ratio", "symmetry", "asymmetry", "leading lines",
            "framing", "negative space", "depth", "layering", "focal point", "centered",
            "off-center", "foreground interest", "minimalist", "busy", "chaotic", "balanced",
            "unbalanced", "dynamic", "static", "geometric", "organic", "layered",
        ],
    ),
    (
        "emotion",
        &[
            "happiness", "sadness", "anger", "fear", "love", "excitement", "curiosity", "hope",
            "despair", "anxiety",
        ],
    ),
    (
        "time",
        &[
            "morning", "afternoon", "evening", "night", "dawn", "dusk", "golden hour",
            "blue hour", "sunset", "sunrise",
        ],
    ),
    (
        "season",
        &[
            "spring", "summer", "autumn", "winter", "rainy season", "harvest", "blooming",
            "frozen",
        ],
    ),
    (
        "weather",
        &[
            "sunny", "cloudy", "rainy", "snowy", "windy", "stormy", "foggy", "clear",
            "thunderstorm", "rainbow",
        ],
    ),
    (
        "texture",
        &[
            "smooth", "rough", "grainy", "silky", "metallic", "wooden", "stone", "glassy",
            "cracked", "matte", "textured", "patterned", "woven", "knitted", "embossed",
            "engraved", "carved", "polished", "glossy", "reflective", "transparent",
            "translucent", "opaque", "frosted", "weathered", "distressed", "velvety", "scaly",
            "feathered", "rugged", "prickly",
        ],
    ),
    (
        "movement",
        &[
            "still", "flowing", "swirling", "floating", "falling", "rising", "twisting",
            "exploding",
        ],
    ),
    (
        "scale",
        &[
            "tiny", "small", "medium", "large", "huge", "gigantic", "miniature", "vast",
        ],
    ),
    (
        "shape",
        &[
            "circle", "square", "triangle", "oval", "star", "spiral", "wave", "fractal",
            "sphere", "cube",
        ],
    ),
    (
        "camera",
        &[
            "wide angle", "telephoto", "fisheye", "macro", "aerial view", "bird's eye view",
            "worm's eye view", "dutch angle", "panoramic", "tilt-shift", "bokeh",
            "depth of field", "shallow focus", "deep focus", "motion blur", "freeze frame",
            "time-lapse", "long exposure", "multiple exposure", "HDR",
        ],
    ),
    (
        "material",
        &[
            "glass", "metal", "wood", "stone", "fabric", "leather", "paper", "plastic",
            "ceramic", "concrete", "marble", "gold", "silver", "bronze", "copper", "crystal",
            "diamond", "rubber", "velvet", "silk",
        ],
    ),
    (
        "render",
        &[
            "3D render", "CGI", "digital art", "digital painting", "vector art", "raster art",
            "pixel art", "voxel art", "low poly", "high poly", "wireframe", "clay render",
            "ambient occlusion", "global illumination", "ray tracing", "path tracing",
            "radiosity", "subsurface scattering", "physically based rendering",
            "non-photorealistic rendering", "hand-painted", "sketch render", "toon shading",
            "real-time render", "cinematic render",
        ],
    ),
    (
        "artist",
        &[
            "Salvador Dali", "Vincent van Gogh", "Pablo Picasso", "Claude Monet",
            "Leonardo da Vinci", "Frida Kahlo", "Andy Warhol", "Georgia O'Keeffe",
            "Jackson Pollock", "Wassily Kandinsky", "Hieronymus Bosch", "Rembrandt",
            "Johannes Vermeer", "Michelangelo", "Gustav Klimt", "Edvard Munch",
            "Henri Matisse", "René Magritte", "Banksy", "Yayoi Kusama",
        ],
    ),
    (
        "genre",
        &[
            "movie poster", "book cover", "comic book", "video game art", "album cover",
            "magazine illustration", "storybook", "propaganda poster", "advertisement",
            "concept art",
        ],
    ),
    (
        "era",
        &[
            "medieval", "Victorian", "1920s", "1950s", "1980s", "futuristic", "ancient",
            "prehistoric", "industrial revolution", "cyber era",
        ],
    ),
    (
        "cultural_influence",
        &[
            "Japanese", "African", "Nordic", "Indian", "Celtic", "Chinese", "Mediterranean",
            "Indigenous", "Middle Eastern", "Latin American",
        ],
    ),
    (
        "level_of_detail",
        &[
            "highly detailed", "simplistic", "cartoonish", "sketch-like", "intricate", "sparse",
            "ornate", "clean", "hyper-realistic", "abstracted",
        ],
    ),
    (
        "atmosphere",
        &[
            "cozy", "industrial", "magical", "sterile", "wild", "urban", "rural", "cosmic",
            "gritty", "ethereal",
        ],
    ),
    (
        "action",
        &[
            "running", "dancing", "fighting", "resting", "flying", "exploring", "celebrating",
            "working", "meditating", "traveling",
        ],
    ),
    (
        "objects",
        &[
            "mountains", "rivers", "cars", "robots", "trees", "castles", "spaceships", "books",
            "mirrors", "clocks",
        ],
    ),
    (
        "art_medium",
        &[
            "watercolor", "oil paint", "charcoal", "pencil sketch", "acrylic", "ink",
            "pastel drawing", "digital painting", "collage", "mosaic",
        ],
    ),
    (
        "technical_aspects",
        &[
            "high resolution", "low resolution", "pixelated", "4K", "8K", "retro gaming",
            "hand-drawn", "photocollage", "matte painting", "blueprint",
        ],
    ),
    (
        "aspect_ratio",
        &[
            "portrait", "landscape", "square", "widescreen", "cinematic", "vertical",
            "horizontal", "panoramic", "circular", "golden rectangle",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Catalog {
        let mut m = IndexMap::new();
        m.insert("Color".to_string(), vec!["red".to_string(), "blue".to_string()]);
        m.insert("composition".to_string(), vec!["symmetry".to_string()]);
        m.insert("mood".to_string(), vec![]);
        Catalog::new(m)
    }

    #[test]
    fn keys_are_lowercased() {
        let c = small();
        assert!(c.contains("color"));
        assert!(c.contains("COLOR"));
        assert_eq!(c.options("Color"), &["red".to_string(), "blue".to_string()]);
    }

    #[test]
    fn categories_keep_insertion_order() {
        let c = small();
        let names: Vec<&str> = c.category_names().collect();
        assert_eq!(names, vec!["color", "composition", "mood"]);
        let counts: Vec<usize> = c.categories().map(|(_, n)| n).collect();
        assert_eq!(counts, vec![2, 1, 0]);
    }

    #[test]
    fn matching_is_case_insensitive_prefix_in_catalog_order() {
        let c = small();
        assert_eq!(c.matching("co"), vec!["color", "composition"]);
        assert_eq!(c.matching("CO"), vec!["color", "composition"]);
        assert_eq!(c.matching("colx"), Vec::<&str>::new());
        // every match is a subset of categories and starts with the prefix
        for m in c.matching("c") {
            assert!(c.contains(m));
            assert!(m.starts_with('c'));
        }
    }

    #[test]
    fn unknown_category_has_no_options() {
        let c = small();
        assert!(c.options("nope").is_empty());
    }

    #[test]
    fn replace_swaps_wholesale() {
        let mut c = small();
        let mut m = IndexMap::new();
        m.insert("era".to_string(), vec!["medieval".to_string()]);
        c.replace(m);
        assert!(!c.contains("color"));
        assert_eq!(c.category_names().collect::<Vec<_>>(), vec!["era"]);
    }

    #[test]
    fn default_catalog_has_color_with_options() {
        let c = default_catalog();
        assert!(c.contains("color"));
        assert!(c.options("color").iter().any(|o| o == "red"));
        assert_eq!(c.matching("col"), vec!["color"]);
    }
}
