//! Compiled-in country table: name, ISO 3166-1 alpha-2 code, continent.

use crate::continent::ContinentCode;
use crate::continent::ContinentCode::{AF, AS, EU, NA, OC, SA};

pub(crate) const COUNTRIES: &[(&str, &str, ContinentCode)] = &[
    ("Afghanistan", "AF", AS),
    ("Albania", "AL", EU),
    ("Algeria", "DZ", AF),
    ("Andorra", "AD", EU),
    ("Angola", "AO", AF),
    ("Antigua and Barbuda", "AG", NA),
    ("Argentina", "AR", SA),
    ("Armenia", "AM", AS),
    ("Aruba", "AW", NA),
    ("Australia", "AU", OC),
    ("Austria", "AT", EU),
    ("Azerbaijan", "AZ", AS),
    ("Bahamas", "BS", NA),
    ("Bahrain", "BH", AS),
    ("Bangladesh", "BD", AS),
    ("Barbados", "BB", NA),
    ("Belarus", "BY", EU),
    ("Belgium", "BE", EU),
    ("Belize", "BZ", NA),
    ("Benin", "BJ", AF),
    ("Bermuda", "BM", NA),
    ("Bhutan", "BT", AS),
    ("Bolivia", "BO", SA),
    ("Bosnia and Herzegovina", "BA", EU),
    ("Botswana", "BW", AF),
    ("Brazil", "BR", SA),
    ("Brunei", "BN", AS),
    ("Bulgaria", "BG", EU),
    ("Burkina Faso", "BF", AF),
    ("Burundi", "BI", AF),
    ("Cambodia", "KH", AS),
    ("Cameroon", "CM", AF),
    ("Canada", "CA", NA),
    ("Cape Verde", "CV", AF),
    ("Central African Republic", "CF", AF),
    ("Chad", "TD", AF),
    ("Chile", "CL", SA),
    ("China", "CN", AS),
    ("Colombia", "CO", SA),
    ("Comoros", "KM", AF),
    ("Congo", "CG", AF),
    ("Costa Rica", "CR", NA),
    ("Cote d'Ivoire", "CI", AF),
    ("Croatia", "HR", EU),
    ("Cuba", "CU", NA),
    ("Cyprus", "CY", AS),
    ("Czech Republic", "CZ", EU),
    ("Democratic Republic of Congo", "CD", AF),
    ("Denmark", "DK", EU),
    ("Djibouti", "DJ", AF),
    ("Dominica", "DM", NA),
    ("Dominican Republic", "DO", NA),
    ("Ecuador", "EC", SA),
    ("Egypt", "EG", AF),
    ("El Salvador", "SV", NA),
    ("Eritrea", "ER", AF),
    ("Estonia", "EE", EU),
    ("Eswatini", "SZ", AF),
    ("Ethiopia", "ET", AF),
    ("Faroe Islands", "FO", EU),
    ("Fiji", "FJ", OC),
    ("Finland", "FI", EU),
    ("France", "FR", EU),
    ("Gabon", "GA", AF),
    ("Gambia", "GM", AF),
    ("Georgia", "GE", AS),
    ("Germany", "DE", EU),
    ("Ghana", "GH", AF),
    ("Greece", "GR", EU),
    ("Greenland", "GL", NA),
    ("Grenada", "GD", NA),
    ("Guam", "GU", OC),
    ("Guatemala", "GT", NA),
    ("Guinea", "GN", AF),
    ("Guyana", "GY", SA),
    ("Haiti", "HT", NA),
    ("Honduras", "HN", NA),
    ("Hong Kong", "HK", AS),
    ("Hungary", "HU", EU),
    ("Iceland", "IS", EU),
    ("India", "IN", AS),
    ("Indonesia", "ID", AS),
    ("Iran", "IR", AS),
    ("Iraq", "IQ", AS),
    ("Ireland", "IE", EU),
    ("Israel", "IL", AS),
    ("Italy", "IT", EU),
    ("Jamaica", "JM", NA),
    ("Japan", "JP", AS),
    ("Jordan", "JO", AS),
    ("Kazakhstan", "KZ", AS),
    ("Kenya", "KE", AF),
    ("Kiribati", "KI", OC),
    ("Kuwait", "KW", AS),
    ("Kyrgyzstan", "KG", AS),
    ("Laos", "LA", AS),
    ("Latvia", "LV", EU),
    ("Lebanon", "LB", AS),
    ("Lesotho", "LS", AF),
    ("Liberia", "LR", AF),
    ("Libya", "LY", AF),
    ("Liechtenstein", "LI", EU),
    ("Lithuania", "LT", EU),
    ("Luxembourg", "LU", EU),
    ("Macao", "MO", AS),
    ("Madagascar", "MG", AF),
    ("Malawi", "MW", AF),
    ("Malaysia", "MY", AS),
    ("Mali", "ML", AF),
    ("Malta", "MT", EU),
    ("Mauritania", "MR", AF),
    ("Mauritius", "MU", AF),
    ("Mexico", "MX", NA),
    ("Moldova", "MD", EU),
    ("Monaco", "MC", EU),
    ("Mongolia", "MN", AS),
    ("Montenegro", "ME", EU),
    ("Morocco", "MA", AF),
    ("Mozambique", "MZ", AF),
    ("Myanmar", "MM", AS),
    ("Namibia", "NA", AF),
    ("Nepal", "NP", AS),
    ("Netherlands", "NL", EU),
    ("New Zealand", "NZ", OC),
    ("Nicaragua", "NI", NA),
    ("Niger", "NE", AF),
    ("Nigeria", "NG", AF),
    ("North Macedonia", "MK", EU),
    ("Norway", "NO", EU),
    ("Oman", "OM", AS),
    ("Pakistan", "PK", AS),
    ("Palestine", "PS", AS),
    ("Panama", "PA", NA),
    ("Papua New Guinea", "PG", OC),
    ("Paraguay", "PY", SA),
    ("Peru", "PE", SA),
    ("Philippines", "PH", AS),
    ("Poland", "PL", EU),
    ("Portugal", "PT", EU),
    ("Puerto Rico", "PR", NA),
    ("Qatar", "QA", AS),
    ("Romania", "RO", EU),
    ("Russia", "RU", EU),
    ("Rwanda", "RW", AF),
    ("San Marino", "SM", EU),
    ("Saudi Arabia", "SA", AS),
    ("Senegal", "SN", AF),
    ("Serbia", "RS", EU),
    ("Seychelles", "SC", AF),
    ("Sierra Leone", "SL", AF),
    ("Singapore", "SG", AS),
    ("Slovakia", "SK", EU),
    ("Slovenia", "SI", EU),
    ("Solomon Islands", "SB", OC),
    ("Somalia", "SO", AF),
    ("South Africa", "ZA", AF),
    ("South Korea", "KR", AS),
    ("South Sudan", "SS", AF),
    ("Spain", "ES", EU),
    ("Sri Lanka", "LK", AS),
    ("Sudan", "SD", AF),
    ("Suriname", "SR", SA),
    ("Sweden", "SE", EU),
    ("Switzerland", "CH", EU),
    ("Syria", "SY", AS),
    ("Taiwan", "TW", AS),
    ("Tajikistan", "TJ", AS),
    ("Tanzania", "TZ", AF),
    ("Thailand", "TH", AS),
    ("Timor-Leste", "TL", AS),
    ("Togo", "TG", AF),
    ("Tonga", "TO", OC),
    ("Trinidad and Tobago", "TT", NA),
    ("Tunisia", "TN", AF),
    ("Turkey", "TR", AS),
    ("Turkmenistan", "TM", AS),
    ("Uganda", "UG", AF),
    ("Ukraine", "UA", EU),
    ("United Arab Emirates", "AE", AS),
    ("United Kingdom", "GB", EU),
    ("United States", "US", NA),
    ("United States Virgin Islands", "VI", NA),
    ("Uruguay", "UY", SA),
    ("Uzbekistan", "UZ", AS),
    ("Vanuatu", "VU", OC),
    ("Venezuela", "VE", SA),
    ("Vietnam", "VN", AS),
    ("Yemen", "YE", AS),
    ("Zambia", "ZM", AF),
    ("Zimbabwe", "ZW", AF),
];

/// Alternate spellings found in the policy and population tables.
pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("Bolivia (Plurinational State of)", "BO"),
    ("Brunei Darussalam", "BN"),
    ("Cabo Verde", "CV"),
    ("Czechia", "CZ"),
    ("DR Congo", "CD"),
    ("Iran (Islamic Republic of)", "IR"),
    ("Ivory Coast", "CI"),
    ("Kyrgyz Republic", "KG"),
    ("Lao PDR", "LA"),
    ("Macedonia", "MK"),
    ("Republic of the Congo", "CG"),
    ("Republic of Moldova", "MD"),
    ("Russian Federation", "RU"),
    ("Slovak Republic", "SK"),
    ("Swaziland", "SZ"),
    ("Syrian Arab Republic", "SY"),
    ("United Republic of Tanzania", "TZ"),
    ("Viet Nam", "VN"),
];
