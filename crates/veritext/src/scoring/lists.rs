//! Static word and phrase tables, one per signal category.
//!
//! All matching against these tables is case-insensitive substring
//! containment over the lowercased input, except [`FUNCTION_WORDS`], which is
//! matched as standalone space-delimited tokens. The tables are deliberately
//! literal data: the scorer is a fixed rule set, not a trained model, and
//! tuning happens by editing these slices.

/// Signal 1: formal/academic vocabulary counted per-occurrence against total
/// word count.
pub const ACADEMIC_WORDS: &[&str] = &[
    "furthermore",
    "moreover",
    "consequently",
    "subsequently",
    "nevertheless",
    "nonetheless",
    "henceforth",
    "paradigm",
    "methodology",
    "empirical",
    "pertinent",
    "salient",
    "intrinsic",
    "delineate",
    "elucidate",
    "substantiate",
    "juxtaposition",
    "dichotomy",
    "multifaceted",
    "comprehensive",
];

/// Signal 1: technology jargon, counted as distinct terms present.
pub const TECH_JARGON: &[&str] = &[
    "algorithm",
    "optimization",
    "implementation",
    "infrastructure",
    "scalability",
    "integration",
    "framework",
    "architecture",
    "paradigm shift",
    "data-driven",
    "machine learning",
    "artificial intelligence",
];

/// Signal 1: AI-era buzzword phrases, counted as distinct phrases present.
pub const AI_BUZZWORDS: &[&str] = &[
    "delve into",
    "delve deeper",
    "in the realm of",
    "navigate the complexities",
    "tapestry of",
    "underscore the importance",
    "a testament to",
    "the landscape of",
    "harness the power",
    "unlock the potential",
];

/// Signal 2: complex sentence-opening connectives (lowercase; matched as
/// sentence starters).
pub const COMPLEX_CONNECTIVES: &[&str] = &[
    "furthermore",
    "moreover",
    "additionally",
    "consequently",
    "subsequently",
    "nevertheless",
    "nonetheless",
    "therefore",
    "however",
    "in addition",
    "as a result",
];

/// Signal 3: formal transition phrases.
pub const FORMAL_TRANSITIONS: &[&str] = &[
    "on the other hand",
    "in contrast",
    "by comparison",
    "in conclusion",
    "to summarize",
    "in summary",
    "first and foremost",
    "with that said",
    "having said that",
    "in other words",
];

/// Signal 3: generic safety/caveat language.
pub const SAFETY_LANGUAGE: &[&str] = &[
    "it is important to note",
    "it is worth noting",
    "it should be noted",
    "keep in mind that",
    "it is essential to",
    "it is crucial to",
    "one should consider",
    "care should be taken",
];

/// Signal 3: balanced-viewpoint framing.
pub const BALANCED_VIEWPOINTS: &[&str] = &[
    "on one hand",
    "on the other hand",
    "both sides",
    "pros and cons",
    "advantages and disadvantages",
    "while some argue",
    "others contend",
];

/// Signals 3 and 8: hedging qualifiers.
pub const HEDGING_QUALIFIERS: &[&str] = &[
    "may potentially",
    "could possibly",
    "might suggest",
    "tends to",
    "in most cases",
    "generally speaking",
    "to some extent",
    "relatively",
    "arguably",
];

/// Signal 4: first-person / personal-voice phrases.
pub const PERSONAL_PHRASES: &[&str] = &[
    "i think",
    "i believe",
    "i feel",
    "i remember",
    "in my opinion",
    "in my experience",
    "my friend",
    "my family",
    "my teacher",
    "we went",
    "i went",
    "i was",
    "i am",
    "me and",
];

/// Signal 4: emotional vocabulary.
pub const EMOTIONAL_WORDS: &[&str] = &[
    "love", "hate", "scared", "excited", "angry", "happy", "sad", "amazing", "terrible", "awesome",
    "awful", "fun",
];

/// Signal 4: informal/colloquial markers.
pub const INFORMAL_WORDS: &[&str] = &[
    "gonna", "wanna", "gotta", "kinda", "sorta", "yeah", "nah", "stuff", "things like that",
    "you know", "basically", "literally", "honestly", "super",
];

/// Signal 5: assistant-style phrases. The strongest single signal in the
/// engine; two or more of these nearly always indicate assistant output.
pub const ASSISTANT_PHRASES: &[&str] = &[
    "i hope this helps",
    "feel free to",
    "let me know if",
    "i'd be happy to",
    "here's a breakdown",
    "let's explore",
    "let's dive into",
    "in this essay, i will",
    "this essay will discuss",
    "certainly!",
    "great question",
];

/// Signal 5: stylistic intensifiers favored by assistant prose.
pub const INTENSIFIERS: &[&str] = &[
    "crucial",
    "essential",
    "vital",
    "significant",
    "profound",
    "remarkable",
    "notable",
    "pivotal",
    "integral",
    "invaluable",
];

/// Signal 5: corporate-speak phrases.
pub const CORPORATE_SPEAK: &[&str] = &[
    "best practices",
    "moving forward",
    "key takeaways",
    "actionable insights",
    "value proposition",
    "synergy",
    "leverage",
    "streamline",
    "holistic approach",
];

/// Signal 7: function words matched as standalone space-delimited tokens.
/// Chosen as the subordinator/relative set so a 12-15% density genuinely
/// indicates clause-heavy prose rather than ordinary English.
pub const FUNCTION_WORDS: &[&str] = &[
    "although", "though", "whereas", "while", "unless", "whether", "since", "because", "that",
    "which", "who", "whom", "whose",
];

/// Signal 8: educational/instructional phrases.
pub const EDUCATIONAL_PHRASES: &[&str] = &[
    "for example",
    "for instance",
    "such as",
    "in order to",
    "as mentioned",
    "as discussed",
    "this demonstrates",
    "this illustrates",
    "this shows that",
    "consider the following",
];

/// Signal 8: single hedge words.
pub const HEDGE_WORDS: &[&str] = &[
    "perhaps", "possibly", "likely", "probably", "seemingly", "apparently", "presumably",
    "typically", "generally", "often",
];

/// Signal 9: list/ordinal transition words.
pub const ORDINAL_TRANSITIONS: &[&str] = &[
    "firstly", "secondly", "thirdly", "finally", "lastly", "in addition", "next", "furthermore",
    "to begin with",
];

/// Signal 9: present-time reference phrases.
pub const PRESENT_TIME_REFERENCES: &[&str] = &[
    "in today's world",
    "in today's society",
    "in the modern era",
    "in recent years",
    "nowadays",
    "in the digital age",
    "in our current",
];

/// Signal 10: self-referential "I am an AI" phrases. Any single hit scores
/// the full flat bonus.
pub const SELF_REFERENTIAL_AI: &[&str] = &[
    "as an ai",
    "as a language model",
    "as an artificial intelligence",
    "i cannot browse",
    "i do not have personal",
    "my training data",
    "i was trained",
];

/// Signal 10: ChatGPT-style helper phrases.
pub const HELPER_PHRASES: &[&str] = &[
    "it's worth mentioning",
    "to put it simply",
    "simply put",
    "in essence",
    "at its core",
    "when it comes to",
    "a wide range of",
    "a variety of factors",
];

/// Signal 10: meta-commentary about the text itself.
pub const META_COMMENTARY: &[&str] = &[
    "as previously mentioned",
    "as stated above",
    "as outlined below",
    "in the following sections",
    "this section covers",
    "the aforementioned",
];

/// Signal 10: redundant-emphasis phrases.
pub const REDUNDANT_EMPHASIS: &[&str] = &[
    "each and every",
    "first and foremost",
    "any and all",
    "various different",
    "absolutely essential",
    "completely eliminate",
    "end result",
];
