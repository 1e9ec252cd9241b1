// Exception dictionary: whole-word respellings that bypass every rule.
//
// Keys are lowercase with apostrophes removed, the way contractions look
// after lyric normalization. Values are per-bucket (1, 4, 8) respellings.

use vocal_core::intensity::Transforms;

const fn t(minimal: &'static str, moderate: &'static str, full: &'static str) -> Transforms {
    Transforms::new(minimal, moderate, full)
}

pub(crate) const EXCEPTION_WORDS: &[(&str, Transforms)] = &[
    // -- Function words --
    ("the", t("the", "dhuh", "duh")),
    ("a", t("a", "uh", "uh")),
    ("an", t("an", "uhn", "uhn")),
    ("and", t("and", "and", "and")),
    ("of", t("of", "uhv", "uhv")),
    ("to", t("to", "tuh", "tuh")),
    ("for", t("for", "fohr", "foh")),
    ("with", t("with", "wihth", "wihth")),
    ("from", t("from", "fruhm", "fruhm")),
    ("in", t("in", "ihn", "ihn")),
    ("at", t("at", "aht", "aht")),
    ("on", t("on", "ahn", "ahn")),
    ("by", t("by", "bah", "bah")),
    ("said", t("said", "sed", "sed")),
    ("have", t("have", "hav", "hav")),
    ("has", t("has", "hahs", "hahs")),
    ("was", t("was", "wuhz", "wuhz")),
    ("were", t("were", "wuhr", "wuhr")),
    ("been", t("been", "bihn", "bihn")),
    ("will", t("will", "wihl", "wihl")),
    ("would", t("would", "wood", "wood")),
    ("could", t("could", "kood", "kood")),
    ("should", t("should", "shood", "shood")),
    ("you", t("you", "yoo", "yah")),
    ("your", t("your", "yohr", "yohr")),
    ("youll", t("youll", "yoo-ll", "yah-ll")),
    ("there", t("there", "thehr", "dehr")),
    ("their", t("their", "thehr", "dehr")),
    ("they", t("they", "theh", "deh")),
    ("them", t("them", "them", "dem")),
    ("then", t("then", "then", "den")),
    ("this", t("this", "this", "dis")),
    ("that", t("that", "that", "dat")),
    ("these", t("these", "theez", "deez")),
    ("those", t("those", "thohz", "dohz")),
    ("what", t("what", "waht", "waht")),
    ("where", t("where", "wehr", "wehr")),
    ("when", t("when", "wehn", "wehn")),
    ("but", t("but", "buht", "bahd")),
    ("or", t("or", "ohr", "oh")),
    ("if", t("if", "ihf", "ehf")),
    ("my", t("my", "mah", "mae")),
    ("our", t("our", "awr", "ahr")),
    ("his", t("his", "hihz", "hehz")),
    ("had", t("had", "hahd", "hahd")),
    ("into", t("into", "ihn-too", "ehn-tuh")),
    ("till", t("till", "tihl", "dihl")),
    ("cause", t("cause", "cawz", "kahz")),
    // -- Song vocabulary --
    ("blue", t("blue", "bluh", "bluh")),
    ("jean", t("jean", "jahn", "jahn")),
    ("baby", t("baby", "bah-bay", "bah-bae")),
    ("lady", t("lady", "lah-dee", "lahd-eh")),
    ("seamstress", t("seamstress", "sehm-stress", "sehm-stress")),
    ("band", t("band", "bahnd", "band")),
    ("pretty", t("pretty", "prih-tee", "preh-teh")),
    ("pirate", t("pirate", "pah-ruht", "pah-ruht")),
    ("smile", t("smile", "smehl", "zmel")),
    ("eyed", t("eyed", "ahed", "aed")),
    ("marry", t("marry", "mahr-ee", "mahr-eh")),
    ("music", t("music", "myoo-sik", "myuh-suhk")),
    ("man", t("man", "mahn", "mahn")),
    ("seen", t("seen", "sehn", "sehn")),
    ("her", t("her", "hehr", "hehr")),
    ("dancing", t("dancing", "dahn-sing", "dahn-sehn")),
    ("sand", t("sand", "sahnd", "sahnd")),
    ("ballerina", t("ballerina", "bahl-luhr-eenah", "bahl-luh-reh-nah")),
    ("mustve", t("mustve", "muht-ve", "muht-ve")),
    ("i", t("i", "ah", "ae")),
    ("everything", t("everything", "eh-ver-ee-thing", "eh-ver-eh-dang")),
    ("childhood", t("childhood", "chah-ld-hood", "cheld-hud")),
    ("memories", t("memories", "meh-mor-ees", "meh-mor-ehs")),
    ("got", t("got", "gaht", "god")),
    ("shes", t("shes", "shehz", "zhehz")),
    ("seems", t("seems", "seemz", "sems")),
    ("face", t("face", "fess", "vez")),
    ("special", t("special", "speh-shul", "beh-zhul")),
    ("place", t("place", "pless", "blez")),
    ("break", t("break", "brehk", "breg")),
    ("down", t("down", "dawn", "dahn")),
    ("too", t("too", "too", "tuh")),
    ("just", t("just", "juhst", "zhahst")),
    ("like", t("like", "lahk", "laek")),
    ("night", t("night", "naht", "nahd")),
    ("heart", t("heart", "hahrt", "hahrd")),
    ("never", t("never", "neh-ver", "neh-vah")),
    ("gonna", t("gonna", "guh-nuh", "gah-nah")),
    ("wanna", t("wanna", "wah-nuh", "wah-nah")),
    // -- Consonant-cluster words --
    ("think", t("think", "thingk", "dingk")),
    ("thing", t("thing", "thing", "ding")),
    ("through", t("through", "throo", "droo")),
    ("thanks", t("thanks", "thangks", "dangks")),
    ("she", t("she", "shee", "zhee")),
    ("show", t("show", "shoh", "zhoh")),
    ("shine", t("shine", "shehn", "zhehn")),
    ("stop", t("stop", "stahp", "dahp")),
    ("start", t("start", "stahrt", "dahrt")),
    ("stand", t("stand", "stahnd", "dahnd")),
    ("still", t("still", "stihl", "dihl")),
    ("speak", t("speak", "speek", "beek")),
    ("spend", t("spend", "spehnd", "behnd")),
    ("small", t("small", "smahl", "mahl")),
    ("smart", t("smart", "smahrt", "mahrt")),
    // -- Contractions, apostrophes already stripped --
    ("well", t("well", "weh-ll", "weh-ll")),
    ("ill", t("ill", "ah-ll", "ah-ll")),
    ("cant", t("cant", "kahnt", "kahnt")),
    ("wont", t("wont", "wohnt", "wohnt")),
    ("dont", t("dont", "dohnt", "dohnt")),
    ("didnt", t("didnt", "dih-dnt", "dih-dnt")),
    ("wouldnt", t("wouldnt", "wood-nt", "wood-nt")),
    ("couldnt", t("couldnt", "kood-nt", "kood-nt")),
    ("shouldnt", t("shouldnt", "shood-nt", "shood-nt")),
    ("wouldve", t("wouldve", "wood-ve", "wood-ve")),
    ("couldve", t("couldve", "kood-ve", "kood-ve")),
    ("shouldve", t("shouldve", "shood-ve", "shood-ve")),
];
