//! CLDR available locales (ICU 74 / CLDR 44 `availableLocales`).
//!
//! One row per language: the bare language subtag followed by every
//! region/script suffix CLDR ships for it. Ids use ICU's underscore form.

pub(super) const AVAILABLE_LOCALES: &[(&str, &[&str])] = &[
    ("af", &["NA", "ZA"]),
    ("agq", &["CM"]),
    ("ak", &["GH"]),
    ("am", &["ET"]),
    ("ar", &[
        "001", "AE", "BH", "DJ", "DZ", "EG", "EH", "ER", "IL", "IQ", "JO", "KM", "KW", "LB",
        "LY", "MA", "MR", "OM", "PS", "QA", "SA", "SD", "SO", "SS", "SY", "TD", "TN", "YE",
    ]),
    ("as", &["IN"]),
    ("asa", &["TZ"]),
    ("ast", &["ES"]),
    ("az", &["Cyrl", "Cyrl_AZ", "Latn", "Latn_AZ"]),
    ("bas", &["CM"]),
    ("be", &["BY"]),
    ("bem", &["ZM"]),
    ("bez", &["TZ"]),
    ("bg", &["BG"]),
    ("bgc", &["IN"]),
    ("bho", &["IN"]),
    ("bm", &["ML"]),
    ("bn", &["BD", "IN"]),
    ("bo", &["CN", "IN"]),
    ("br", &["FR"]),
    ("brx", &["IN"]),
    ("bs", &["Cyrl", "Cyrl_BA", "Latn", "Latn_BA"]),
    ("ca", &["AD", "ES", "FR", "IT"]),
    ("ccp", &["BD", "IN"]),
    ("ce", &["RU"]),
    ("ceb", &["PH"]),
    ("cgg", &["UG"]),
    ("chr", &["US"]),
    ("ckb", &["IQ", "IR"]),
    ("cs", &["CZ"]),
    ("cv", &["RU"]),
    ("cy", &["GB"]),
    ("da", &["DK", "GL"]),
    ("dav", &["KE"]),
    ("de", &["AT", "BE", "CH", "DE", "IT", "LI", "LU"]),
    ("dje", &["NE"]),
    ("doi", &["IN"]),
    ("dsb", &["DE"]),
    ("dua", &["CM"]),
    ("dyo", &["SN"]),
    ("dz", &["BT"]),
    ("ebu", &["KE"]),
    ("ee", &["GH", "TG"]),
    ("el", &["CY", "GR"]),
    ("en", &[
        "001", "150", "AE", "AG", "AI", "AS", "AT", "AU", "BB", "BE", "BI", "BM", "BS", "BW",
        "BZ", "CA", "CC", "CH", "CK", "CM", "CX", "CY", "DE", "DG", "DK", "DM", "ER", "FI",
        "FJ", "FK", "FM", "GB", "GD", "GG", "GH", "GI", "GM", "GU", "GY", "HK", "IE", "IL",
        "IM", "IN", "IO", "JE", "JM", "KE", "KI", "KN", "KY", "LC", "LR", "LS", "MG", "MH",
        "MO", "MP", "MS", "MT", "MU", "MV", "MW", "MY", "NA", "NF", "NG", "NL", "NR", "NU",
        "NZ", "PG", "PH", "PK", "PN", "PR", "PW", "RW", "SB", "SC", "SD", "SE", "SG", "SH",
        "SI", "SL", "SS", "SX", "SZ", "TC", "TK", "TO", "TT", "TV", "TZ", "UG", "UM", "US",
        "US_POSIX", "VC", "VG", "VI", "VU", "WS", "ZA", "ZM", "ZW",
    ]),
    ("eo", &["001"]),
    ("es", &[
        "419", "AR", "BO", "BR", "BZ", "CL", "CO", "CR", "CU", "DO", "EA", "EC", "ES", "GQ",
        "GT", "HN", "IC", "MX", "NI", "PA", "PE", "PH", "PR", "PY", "SV", "US", "UY", "VE",
    ]),
    ("et", &["EE"]),
    ("eu", &["ES"]),
    ("ewo", &["CM"]),
    ("fa", &["AF", "IR"]),
    ("ff", &[
        "Adlm", "Adlm_BF", "Adlm_CM", "Adlm_GH", "Adlm_GM", "Adlm_GN", "Adlm_GW", "Adlm_LR",
        "Adlm_MR", "Adlm_NE", "Adlm_NG", "Adlm_SL", "Adlm_SN", "Latn", "Latn_BF", "Latn_CM",
        "Latn_GH", "Latn_GM", "Latn_GN", "Latn_GW", "Latn_LR", "Latn_MR", "Latn_NE",
        "Latn_NG", "Latn_SL", "Latn_SN",
    ]),
    ("fi", &["FI"]),
    ("fil", &["PH"]),
    ("fo", &["DK", "FO"]),
    ("fr", &[
        "BE", "BF", "BI", "BJ", "BL", "CA", "CD", "CF", "CG", "CH", "CI", "CM", "DJ", "DZ",
        "FR", "GA", "GF", "GN", "GP", "GQ", "HT", "KM", "LU", "MA", "MC", "MF", "MG", "ML",
        "MQ", "MR", "MU", "NC", "NE", "PF", "PM", "RE", "RW", "SC", "SN", "SY", "TD", "TG",
        "TN", "VU", "WF", "YT",
    ]),
    ("fur", &["IT"]),
    ("fy", &["NL"]),
    ("ga", &["GB", "IE"]),
    ("gd", &["GB"]),
    ("gl", &["ES"]),
    ("gsw", &["CH", "FR", "LI"]),
    ("gu", &["IN"]),
    ("guz", &["KE"]),
    ("gv", &["IM"]),
    ("ha", &["GH", "NE", "NG"]),
    ("haw", &["US"]),
    ("he", &["IL"]),
    ("hi", &["IN", "Latn", "Latn_IN"]),
    ("hr", &["BA", "HR"]),
    ("hsb", &["DE"]),
    ("hu", &["HU"]),
    ("hy", &["AM"]),
    ("ia", &["001"]),
    ("id", &["ID"]),
    ("ig", &["NG"]),
    ("ii", &["CN"]),
    ("is", &["IS"]),
    ("it", &["CH", "IT", "SM", "VA"]),
    ("ja", &["JP"]),
    ("jgo", &["CM"]),
    ("jmc", &["TZ"]),
    ("jv", &["ID"]),
    ("ka", &["GE"]),
    ("kab", &["DZ"]),
    ("kam", &["KE"]),
    ("kde", &["TZ"]),
    ("kea", &["CV"]),
    ("kgp", &["BR"]),
    ("khq", &["ML"]),
    ("ki", &["KE"]),
    ("kk", &["KZ"]),
    ("kkj", &["CM"]),
    ("kl", &["GL"]),
    ("kln", &["KE"]),
    ("km", &["KH"]),
    ("kn", &["IN"]),
    ("ko", &["KP", "KR"]),
    ("kok", &["IN"]),
    ("ks", &["Arab", "Arab_IN", "Deva", "Deva_IN"]),
    ("ksb", &["TZ"]),
    ("ksf", &["CM"]),
    ("ksh", &["DE"]),
    ("ku", &["TR"]),
    ("kw", &["GB"]),
    ("ky", &["KG"]),
    ("lag", &["TZ"]),
    ("lb", &["LU"]),
    ("lg", &["UG"]),
    ("lkt", &["US"]),
    ("ln", &["AO", "CD", "CF", "CG"]),
    ("lo", &["LA"]),
    ("lrc", &["IQ", "IR"]),
    ("lt", &["LT"]),
    ("lu", &["CD"]),
    ("luo", &["KE"]),
    ("luy", &["KE"]),
    ("lv", &["LV"]),
    ("mai", &["IN"]),
    ("mas", &["KE", "TZ"]),
    ("mer", &["KE"]),
    ("mfe", &["MU"]),
    ("mg", &["MG"]),
    ("mgh", &["MZ"]),
    ("mgo", &["CM"]),
    ("mi", &["NZ"]),
    ("mk", &["MK"]),
    ("ml", &["IN"]),
    ("mn", &["MN"]),
    ("mni", &["Beng", "Beng_IN"]),
    ("mr", &["IN"]),
    ("ms", &["BN", "ID", "MY", "SG"]),
    ("mt", &["MT"]),
    ("mua", &["CM"]),
    ("my", &["MM"]),
    ("mzn", &["IR"]),
    ("naq", &["NA"]),
    ("nb", &["NO", "SJ"]),
    ("nd", &["ZW"]),
    ("nds", &["DE", "NL"]),
    ("ne", &["IN", "NP"]),
    ("nl", &["AW", "BE", "BQ", "CW", "NL", "SR", "SX"]),
    ("nmg", &["CM"]),
    ("nn", &["NO"]),
    ("nnh", &["CM"]),
    ("no", &[]),
    ("nus", &["SS"]),
    ("nyn", &["UG"]),
    ("om", &["ET", "KE"]),
    ("or", &["IN"]),
    ("os", &["GE", "RU"]),
    ("pa", &["Arab", "Arab_PK", "Guru", "Guru_IN"]),
    ("pcm", &["NG"]),
    ("pl", &["PL"]),
    ("ps", &["AF", "PK"]),
    ("pt", &[
        "AO", "BR", "CH", "CV", "GQ", "GW", "LU", "MO", "MZ", "PT", "ST", "TL",
    ]),
    ("qu", &["BO", "EC", "PE"]),
    ("raj", &["IN"]),
    ("rm", &["CH"]),
    ("rn", &["BI"]),
    ("ro", &["MD", "RO"]),
    ("rof", &["TZ"]),
    ("ru", &["BY", "KG", "KZ", "MD", "RU", "UA"]),
    ("rw", &["RW"]),
    ("rwk", &["TZ"]),
    ("sa", &["IN"]),
    ("sah", &["RU"]),
    ("saq", &["KE"]),
    ("sat", &["Olck", "Olck_IN"]),
    ("sbp", &["TZ"]),
    ("sc", &["IT"]),
    ("sd", &["Arab", "Arab_PK", "Deva", "Deva_IN"]),
    ("se", &["FI", "NO", "SE"]),
    ("seh", &["MZ"]),
    ("ses", &["ML"]),
    ("sg", &["CF"]),
    ("shi", &["Latn", "Latn_MA", "Tfng", "Tfng_MA"]),
    ("si", &["LK"]),
    ("sk", &["SK"]),
    ("sl", &["SI"]),
    ("smn", &["FI"]),
    ("sn", &["ZW"]),
    ("so", &["DJ", "ET", "KE", "SO"]),
    ("sq", &["AL", "MK", "XK"]),
    ("sr", &[
        "Cyrl", "Cyrl_BA", "Cyrl_ME", "Cyrl_RS", "Cyrl_XK", "Latn", "Latn_BA", "Latn_ME",
        "Latn_RS", "Latn_XK",
    ]),
    ("su", &["Latn", "Latn_ID"]),
    ("sv", &["AX", "FI", "SE"]),
    ("sw", &["CD", "KE", "TZ", "UG"]),
    ("ta", &["IN", "LK", "MY", "SG"]),
    ("te", &["IN"]),
    ("teo", &["KE", "UG"]),
    ("tg", &["TJ"]),
    ("th", &["TH"]),
    ("ti", &["ER", "ET"]),
    ("tk", &["TM"]),
    ("to", &["TO"]),
    ("tr", &["CY", "TR"]),
    ("tt", &["RU"]),
    ("twq", &["NE"]),
    ("tzm", &["MA"]),
    ("ug", &["CN"]),
    ("uk", &["UA"]),
    ("ur", &["IN", "PK"]),
    ("uz", &["Arab", "Arab_AF", "Cyrl", "Cyrl_UZ", "Latn", "Latn_UZ"]),
    ("vai", &["Latn", "Latn_LR", "Vaii", "Vaii_LR"]),
    ("vi", &["VN"]),
    ("vun", &["TZ"]),
    ("wae", &["CH"]),
    ("wo", &["SN"]),
    ("xh", &["ZA"]),
    ("xog", &["UG"]),
    ("yav", &["CM"]),
    ("yi", &["001"]),
    ("yo", &["BJ", "NG"]),
    ("yrl", &["BR", "CO", "VE"]),
    ("yue", &["Hans", "Hans_CN", "Hant", "Hant_HK"]),
    ("zgh", &["MA"]),
    ("zh", &[
        "Hans", "Hans_CN", "Hans_HK", "Hans_MO", "Hans_SG", "Hant", "Hant_HK", "Hant_MO",
        "Hant_TW",
    ]),
    ("zu", &["ZA"]),
];

/// Every available locale id, languages first within each row.
pub(super) fn locale_ids() -> impl Iterator<Item = String> {
    AVAILABLE_LOCALES.iter().flat_map(|(language, suffixes)| {
        std::iter::once(language.to_string())
            .chain(suffixes.iter().map(move |s| format!("{}_{}", language, s)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let ids: Vec<String> = locale_ids().collect();
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
        assert!(ids.len() > 600);
    }

    #[test]
    fn test_ids_underscore_form() {
        let ids: Vec<String> = locale_ids().collect();
        assert!(ids.contains(&"en_NZ".to_string()));
        assert!(ids.contains(&"sr_Latn_RS".to_string()));
        assert!(ids.contains(&"br".to_string()));
        assert!(ids.iter().all(|id| !id.contains('-')));
    }
}
