//! Literal name tables for the map layer's canonical key set.
//!
//! Both tables are ordered: the partial-match cascade resolves ties by
//! declaration order, so these stay pair slices rather than hash maps.

/// Raw dataset spelling -> canonical map key, matched case-sensitively first
/// and case-insensitively second. Many-to-one; every canonical key also
/// appears as its own variant so canonicalization is idempotent.
pub static CANONICAL_COUNTRY_TABLE: &[(&str, &str)] = &[
    ("Afghanistan", "Afghanistan"),
    ("Albania", "Albania"),
    ("Algeria", "Algeria"),
    ("Andorra", "Andorra"),
    ("Angola", "Angola"),
    ("Antigua and Barbuda", "Antigua and Barbuda"),
    ("Antigua & Barbuda", "Antigua and Barbuda"),
    ("Argentina", "Argentina"),
    ("Armenia", "Armenia"),
    ("Australia", "Australia"),
    ("Austria", "Austria"),
    ("Azerbaijan", "Azerbaijan"),
    ("Bahamas", "Bahamas"),
    ("Bahamas, The", "Bahamas"),
    ("The Bahamas", "Bahamas"),
    ("Bahrain", "Bahrain"),
    ("Bangladesh", "Bangladesh"),
    ("Barbados", "Barbados"),
    ("Belarus", "Belarus"),
    ("Belgium", "Belgium"),
    ("Belize", "Belize"),
    ("Benin", "Benin"),
    ("Bhutan", "Bhutan"),
    ("Bolivia", "Bolivia"),
    ("Bolivia, Plurinational State of", "Bolivia"),
    ("Bosnia and Herzegovina", "Bosnia and Herzegovina"),
    ("Bosnia-Herzegovina", "Bosnia and Herzegovina"),
    ("Bosnia", "Bosnia and Herzegovina"),
    ("Botswana", "Botswana"),
    ("Brazil", "Brazil"),
    ("Brunei", "Brunei"),
    ("Brunei Darussalam", "Brunei"),
    ("Bulgaria", "Bulgaria"),
    ("Burkina Faso", "Burkina Faso"),
    ("Burundi", "Burundi"),
    ("Cambodia", "Cambodia"),
    ("Cameroon", "Cameroon"),
    ("Canada", "Canada"),
    ("Cape Verde", "Cape Verde"),
    ("Cabo Verde", "Cape Verde"),
    ("Central African Republic", "Central African Republic"),
    ("Chad", "Chad"),
    ("Chile", "Chile"),
    ("China", "China"),
    ("China, People's Republic of", "China"),
    ("People's Republic of China", "China"),
    ("Colombia", "Colombia"),
    ("Comoros", "Comoros"),
    ("Costa Rica", "Costa Rica"),
    ("Croatia", "Croatia"),
    ("Cuba", "Cuba"),
    ("Curacao", "Curacao"),
    ("Cyprus", "Cyprus"),
    ("Czech Republic", "Czech Republic"),
    ("Czechia", "Czech Republic"),
    ("Democratic Republic of the Congo", "Democratic Republic of the Congo"),
    ("Congo, Dem. Rep.", "Democratic Republic of the Congo"),
    ("Congo, Democratic Republic of the", "Democratic Republic of the Congo"),
    ("Congo-Kinshasa", "Democratic Republic of the Congo"),
    ("DR Congo", "Democratic Republic of the Congo"),
    ("DRC", "Democratic Republic of the Congo"),
    ("Republic of the Congo", "Republic of the Congo"),
    ("Congo, Rep.", "Republic of the Congo"),
    ("Congo-Brazzaville", "Republic of the Congo"),
    ("Congo", "Republic of the Congo"),
    ("Denmark", "Denmark"),
    ("Djibouti", "Djibouti"),
    ("Dominica", "Dominica"),
    ("Dominican Republic", "Dominican Republic"),
    ("East Timor", "East Timor"),
    ("Timor-Leste", "East Timor"),
    ("Ecuador", "Ecuador"),
    ("Egypt", "Egypt"),
    ("Egypt, Arab Rep.", "Egypt"),
    ("El Salvador", "El Salvador"),
    ("Equatorial Guinea", "Equatorial Guinea"),
    ("Eritrea", "Eritrea"),
    ("Estonia", "Estonia"),
    ("Eswatini", "Eswatini"),
    ("Swaziland", "Eswatini"),
    ("Ethiopia", "Ethiopia"),
    ("Fiji", "Fiji"),
    ("Finland", "Finland"),
    ("France", "France"),
    ("Gabon", "Gabon"),
    ("Gambia", "Gambia"),
    ("Gambia, The", "Gambia"),
    ("The Gambia", "Gambia"),
    ("Georgia", "Georgia"),
    ("Germany", "Germany"),
    ("Ghana", "Ghana"),
    ("Greece", "Greece"),
    ("Grenada", "Grenada"),
    ("Guatemala", "Guatemala"),
    ("Guinea", "Guinea"),
    ("Guinea-Bissau", "Guinea-Bissau"),
    ("Guinea Bissau", "Guinea-Bissau"),
    ("Guyana", "Guyana"),
    ("Haiti", "Haiti"),
    ("Honduras", "Honduras"),
    ("Hong Kong", "Hong Kong"),
    ("Hong Kong SAR, China", "Hong Kong"),
    ("Hungary", "Hungary"),
    ("Iceland", "Iceland"),
    ("India", "India"),
    ("Indonesia", "Indonesia"),
    ("Iran", "Iran"),
    ("Iran, Islamic Rep.", "Iran"),
    ("Iran, Islamic Republic of", "Iran"),
    ("Islamic Republic of Iran", "Iran"),
    ("Iraq", "Iraq"),
    ("Ireland", "Ireland"),
    ("Republic of Ireland", "Ireland"),
    ("Israel", "Israel"),
    ("Italy", "Italy"),
    ("Ivory Coast", "Ivory Coast"),
    ("Cote d'Ivoire", "Ivory Coast"),
    ("Cote dIvoire", "Ivory Coast"),
    ("Jamaica", "Jamaica"),
    ("Japan", "Japan"),
    ("Jordan", "Jordan"),
    ("Kazakhstan", "Kazakhstan"),
    ("Kenya", "Kenya"),
    ("Kiribati", "Kiribati"),
    ("Kosovo", "Kosovo"),
    ("Kuwait", "Kuwait"),
    ("Kyrgyzstan", "Kyrgyzstan"),
    ("Kyrgyz Republic", "Kyrgyzstan"),
    ("Laos", "Laos"),
    ("Lao PDR", "Laos"),
    ("Lao People's Democratic Republic", "Laos"),
    ("Latvia", "Latvia"),
    ("Lebanon", "Lebanon"),
    ("Lesotho", "Lesotho"),
    ("Liberia", "Liberia"),
    ("Libya", "Libya"),
    ("Liechtenstein", "Liechtenstein"),
    ("Lithuania", "Lithuania"),
    ("Luxembourg", "Luxembourg"),
    ("Macau", "Macau"),
    ("Macao", "Macau"),
    ("Macao SAR, China", "Macau"),
    ("Madagascar", "Madagascar"),
    ("Malawi", "Malawi"),
    ("Malaysia", "Malaysia"),
    ("Maldives", "Maldives"),
    ("Mali", "Mali"),
    ("Malta", "Malta"),
    ("Marshall Islands", "Marshall Islands"),
    ("Mauritania", "Mauritania"),
    ("Mauritius", "Mauritius"),
    ("Mexico", "Mexico"),
    ("Micronesia", "Micronesia"),
    ("Micronesia, Fed. Sts.", "Micronesia"),
    ("Federated States of Micronesia", "Micronesia"),
    ("Moldova", "Moldova"),
    ("Moldova, Republic of", "Moldova"),
    ("Republic of Moldova", "Moldova"),
    ("Monaco", "Monaco"),
    ("Mongolia", "Mongolia"),
    ("Montenegro", "Montenegro"),
    ("Morocco", "Morocco"),
    ("Mozambique", "Mozambique"),
    ("Myanmar", "Myanmar"),
    ("Burma", "Myanmar"),
    ("Namibia", "Namibia"),
    ("Nauru", "Nauru"),
    ("Nepal", "Nepal"),
    ("Netherlands", "Netherlands"),
    ("The Netherlands", "Netherlands"),
    ("Holland", "Netherlands"),
    ("New Zealand", "New Zealand"),
    ("Nicaragua", "Nicaragua"),
    ("Niger", "Niger"),
    ("Nigeria", "Nigeria"),
    ("North Korea", "North Korea"),
    ("Korea, Dem. People's Rep.", "North Korea"),
    ("Korea, Democratic People's Republic of", "North Korea"),
    ("Democratic People's Republic of Korea", "North Korea"),
    ("DPRK", "North Korea"),
    ("North Macedonia", "North Macedonia"),
    ("Macedonia", "North Macedonia"),
    ("Macedonia, FYR", "North Macedonia"),
    ("The former Yugoslav Republic of Macedonia", "North Macedonia"),
    ("Norway", "Norway"),
    ("Oman", "Oman"),
    ("Pakistan", "Pakistan"),
    ("Palau", "Palau"),
    ("Palestine", "Palestine"),
    ("State of Palestine", "Palestine"),
    ("Palestinian Territories", "Palestine"),
    ("West Bank and Gaza", "Palestine"),
    ("Panama", "Panama"),
    ("Papua New Guinea", "Papua New Guinea"),
    ("Paraguay", "Paraguay"),
    ("Peru", "Peru"),
    ("Philippines", "Philippines"),
    ("The Philippines", "Philippines"),
    ("Poland", "Poland"),
    ("Portugal", "Portugal"),
    ("Qatar", "Qatar"),
    ("Romania", "Romania"),
    ("Russia", "Russia"),
    ("Russian Federation", "Russia"),
    ("Rwanda", "Rwanda"),
    ("Saint Kitts and Nevis", "Saint Kitts and Nevis"),
    ("St. Kitts and Nevis", "Saint Kitts and Nevis"),
    ("Saint Lucia", "Saint Lucia"),
    ("St. Lucia", "Saint Lucia"),
    ("Saint Vincent and the Grenadines", "Saint Vincent and the Grenadines"),
    ("St. Vincent and the Grenadines", "Saint Vincent and the Grenadines"),
    ("Samoa", "Samoa"),
    ("San Marino", "San Marino"),
    ("Sao Tome and Principe", "Sao Tome and Principe"),
    ("Sao Tome & Principe", "Sao Tome and Principe"),
    ("Saudi Arabia", "Saudi Arabia"),
    ("Senegal", "Senegal"),
    ("Serbia", "Serbia"),
    ("Seychelles", "Seychelles"),
    ("Sierra Leone", "Sierra Leone"),
    ("Singapore", "Singapore"),
    ("Slovakia", "Slovakia"),
    ("Slovak Republic", "Slovakia"),
    ("Slovenia", "Slovenia"),
    ("Solomon Islands", "Solomon Islands"),
    ("Somalia", "Somalia"),
    ("South Africa", "South Africa"),
    ("South Korea", "South Korea"),
    ("Korea, Republic of", "South Korea"),
    ("Korea, Rep.", "South Korea"),
    ("Republic of Korea", "South Korea"),
    ("Korea", "South Korea"),
    ("South Sudan", "South Sudan"),
    ("Spain", "Spain"),
    ("Sri Lanka", "Sri Lanka"),
    ("Sudan", "Sudan"),
    ("Suriname", "Suriname"),
    ("Sweden", "Sweden"),
    ("Switzerland", "Switzerland"),
    ("Syria", "Syria"),
    ("Syrian Arab Republic", "Syria"),
    ("Taiwan", "Taiwan"),
    ("Taiwan, Province of China", "Taiwan"),
    ("Chinese Taipei", "Taiwan"),
    ("Tajikistan", "Tajikistan"),
    ("Tanzania", "Tanzania"),
    ("Tanzania, United Republic of", "Tanzania"),
    ("United Republic of Tanzania", "Tanzania"),
    ("Thailand", "Thailand"),
    ("Togo", "Togo"),
    ("Tonga", "Tonga"),
    ("Trinidad and Tobago", "Trinidad and Tobago"),
    ("Trinidad & Tobago", "Trinidad and Tobago"),
    ("Tunisia", "Tunisia"),
    ("Turkey", "Turkey"),
    ("Turkiye", "Turkey"),
    ("Turkmenistan", "Turkmenistan"),
    ("Tuvalu", "Tuvalu"),
    ("Uganda", "Uganda"),
    ("Ukraine", "Ukraine"),
    ("United Arab Emirates", "United Arab Emirates"),
    ("UAE", "United Arab Emirates"),
    ("United Kingdom", "United Kingdom"),
    ("UK", "United Kingdom"),
    ("U.K.", "United Kingdom"),
    ("Great Britain", "United Kingdom"),
    ("Britain", "United Kingdom"),
    ("United Kingdom of Great Britain and Northern Ireland", "United Kingdom"),
    ("United States", "United States"),
    ("United States of America", "United States"),
    ("USA", "United States"),
    ("U.S.", "United States"),
    ("U.S.A.", "United States"),
    ("US", "United States"),
    ("America", "United States"),
    ("Uruguay", "Uruguay"),
    ("Uzbekistan", "Uzbekistan"),
    ("Vanuatu", "Vanuatu"),
    ("Vatican City", "Vatican City"),
    ("Holy See", "Vatican City"),
    ("Venezuela", "Venezuela"),
    ("Venezuela, RB", "Venezuela"),
    ("Venezuela, Bolivarian Republic of", "Venezuela"),
    ("Vietnam", "Vietnam"),
    ("Viet Nam", "Vietnam"),
    ("Yemen", "Yemen"),
    ("Yemen, Rep.", "Yemen"),
    ("Zambia", "Zambia"),
    ("Zimbabwe", "Zimbabwe"),
];

/// Fallback cascade for spellings the exact tables miss. Patterns are
/// lowercase and tested as substrings of the lowercased input; the first
/// hit in declaration order wins, so specific patterns sit above the
/// general ones they contain ("north korea" above "korea", "nigeria"
/// above "niger").
pub static PARTIAL_MATCH_TABLE: &[(&str, &str)] = &[
    ("korea, dem", "North Korea"),
    ("democratic people's republic of korea", "North Korea"),
    ("north korea", "North Korea"),
    ("korea", "South Korea"),
    ("congo, dem", "Democratic Republic of the Congo"),
    ("democratic republic of the congo", "Democratic Republic of the Congo"),
    ("dr congo", "Democratic Republic of the Congo"),
    ("congo", "Republic of the Congo"),
    ("ivoire", "Ivory Coast"),
    ("ivory", "Ivory Coast"),
    ("united states", "United States"),
    ("united kingdom", "United Kingdom"),
    ("russia", "Russia"),
    ("iran", "Iran"),
    ("syria", "Syria"),
    ("venezuela", "Venezuela"),
    ("bolivia", "Bolivia"),
    ("tanzania", "Tanzania"),
    ("moldova", "Moldova"),
    ("micronesia", "Micronesia"),
    ("macedonia", "North Macedonia"),
    ("myanmar", "Myanmar"),
    ("burma", "Myanmar"),
    ("lao", "Laos"),
    ("viet nam", "Vietnam"),
    ("vietnam", "Vietnam"),
    ("czech", "Czech Republic"),
    ("slovak", "Slovakia"),
    ("kyrgyz", "Kyrgyzstan"),
    ("brunei", "Brunei"),
    ("cape verde", "Cape Verde"),
    ("cabo verde", "Cape Verde"),
    ("timor", "East Timor"),
    ("swaziland", "Eswatini"),
    ("eswatini", "Eswatini"),
    ("palestin", "Palestine"),
    ("hong kong", "Hong Kong"),
    ("macao", "Macau"),
    ("macau", "Macau"),
    ("taiwan", "Taiwan"),
    ("taipei", "Taiwan"),
    ("vatican", "Vatican City"),
    ("holy see", "Vatican City"),
    ("emirates", "United Arab Emirates"),
    ("saudi", "Saudi Arabia"),
    ("turkiye", "Turkey"),
    ("turkey", "Turkey"),
    ("egypt", "Egypt"),
    ("south sudan", "South Sudan"),
    ("sudan", "Sudan"),
    ("south africa", "South Africa"),
    ("central african", "Central African Republic"),
    ("guinea-bissau", "Guinea-Bissau"),
    ("guinea bissau", "Guinea-Bissau"),
    ("equatorial guinea", "Equatorial Guinea"),
    ("papua", "Papua New Guinea"),
    ("new guinea", "Papua New Guinea"),
    ("guinea", "Guinea"),
    ("nigeria", "Nigeria"),
    ("niger", "Niger"),
    ("dominican", "Dominican Republic"),
    ("dominica", "Dominica"),
    ("american samoa", "American Samoa"),
    ("samoa", "Samoa"),
    ("bosnia", "Bosnia and Herzegovina"),
    ("herzegovina", "Bosnia and Herzegovina"),
    ("trinidad", "Trinidad and Tobago"),
    ("antigua", "Antigua and Barbuda"),
    ("kitts", "Saint Kitts and Nevis"),
    ("vincent and the grenadines", "Saint Vincent and the Grenadines"),
    ("sao tome", "Sao Tome and Principe"),
    ("netherlands", "Netherlands"),
    ("holland", "Netherlands"),
    ("britain", "United Kingdom"),
    ("gambia", "Gambia"),
    ("bahamas", "Bahamas"),
];
