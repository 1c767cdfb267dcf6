//! Compiled-in word list used when no dictionary source is available.

/// Common nouns, verbs, and adjectives covering every seed word's theme.
///
/// Used verbatim when the real word list cannot be loaded. Duplicates
/// collapse when the list is turned into a set.
pub const FALLBACK_WORDS: &[&str] = &[
    "fire", "heat", "sun", "light", "bright", "star", "space", "void", "empty", "full",
    "ocean", "water", "wave", "sound", "music", "song", "bird", "fly", "sky", "cloud",
    "rain", "storm", "wind", "tree", "leaf", "green", "grass", "earth", "ground", "rock",
    "stone", "hard", "soft", "pillow", "sleep", "dream", "night", "dark", "black", "white",
    "snow", "cold", "ice", "frozen", "time", "clock", "hour", "minute", "second", "fast",
    "slow", "walk", "run", "race", "finish", "start", "begin", "new", "old", "young",
    "child", "baby", "small", "big", "large", "huge", "giant", "tiny", "little", "mini",
    "micro", "book", "read", "write", "pen", "paper", "word", "letter", "alphabet",
    "dance", "move", "body", "hand", "foot", "head", "eye", "see", "look", "watch",
    "tiger", "cat", "dog", "animal", "wild", "tame", "house", "home", "room", "door",
    "window", "glass", "clear", "see", "through", "air", "breath", "life", "live",
    "love", "heart", "feel", "emotion", "happy", "sad", "angry", "calm", "peace",
    "war", "fight", "battle", "win", "lose", "game", "play", "fun", "joy", "laugh",
    "smile", "face", "nose", "mouth", "teeth", "bite", "eat", "food", "hungry",
    "full", "stomach", "body", "skin", "touch", "feel", "warm", "hot", "cool",
    "temperature", "weather", "season", "spring", "summer", "fall", "winter",
    "bloom", "flower", "rose", "red", "color", "paint", "art", "create", "make",
    "build", "construct", "destroy", "break", "fix", "repair", "work", "job",
    "money", "rich", "poor", "wealth", "gold", "silver", "metal", "iron", "steel",
    "strong", "weak", "power", "energy", "electric", "spark", "lightning", "thunder",
    "loud", "quiet", "silence", "noise", "hear", "listen", "ear", "deaf", "blind",
    "magic", "spell", "witch", "wizard", "fantasy", "real", "fake", "true", "false",
    "lie", "truth", "honest", "trust", "friend", "enemy", "stranger", "meet",
    "hello", "goodbye", "welcome", "leave", "stay", "go", "come", "here", "there",
    "where", "when", "how", "why", "what", "who", "question", "answer", "know",
    "learn", "teach", "school", "student", "teacher", "lesson", "test", "grade",
    "pass", "fail", "try", "attempt", "success", "failure", "hope", "fear",
    "brave", "scared", "afraid", "courage", "coward", "hero", "villain", "good",
    "bad", "evil", "angel", "devil", "heaven", "hell", "god", "pray", "church",
    "religion", "believe", "faith", "doubt", "sure", "maybe", "possible", "impossible",
];
