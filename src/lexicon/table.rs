//! Built-in synonym table.

/// Word -> synonyms, grouped loosely by topic. Order within each list is kept.
pub const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    // Academic / learning
    ("learn", &["study", "understand", "master", "grasp", "acquire"]),
    (
        "difference",
        &["distinction", "contrast", "variation", "gap", "disparity"],
    ),
    (
        "growth",
        &["development", "progress", "advancement", "improvement", "expansion"],
    ),
    (
        "development",
        &["growth", "progress", "evolution", "advancement", "improvement"],
    ),
    ("personal", &["individual", "private", "self", "own", "human"]),
    // Question words
    ("what", &["how", "why", "which", "where"]),
    ("how", &["what", "why", "which", "method"]),
    ("why", &["how", "what", "reason", "cause"]),
    // Programming
    ("function", &["method", "procedure", "operation", "routine"]),
    ("variable", &["parameter", "value", "data", "element"]),
    ("algorithm", &["method", "approach", "technique", "procedure"]),
    ("code", &["program", "script", "software", "implementation"]),
    // Common verbs
    ("create", &["make", "build", "develop", "generate", "produce"]),
    ("use", &["utilize", "employ", "apply", "implement"]),
    ("help", &["assist", "support", "aid", "guide"]),
    ("find", &["locate", "discover", "identify", "search"]),
    // Technology
    ("computer", &["machine", "system", "device", "pc"]),
    ("program", &["software", "application", "app", "code"]),
    ("data", &["information", "details", "facts", "content"]),
    ("system", &["platform", "framework", "structure", "setup"]),
    // General adjectives
    ("big", &["large", "huge", "massive", "enormous"]),
    ("small", &["tiny", "little", "minor", "compact"]),
    ("good", &["excellent", "great", "amazing", "wonderful"]),
    ("bad", &["poor", "terrible", "awful", "horrible"]),
    ("fast", &["quick", "rapid", "speedy", "swift"]),
    ("slow", &["sluggish", "gradual", "delayed", "lazy"]),
];
