use super::AffiliateProduct;

fn product(keywords: &[&str], url: &str, display_name: &str) -> AffiliateProduct {
    AffiliateProduct {
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        url: url.to_string(),
        display_name: Some(display_name.to_string()),
    }
}

/// Built-in product table.
///
/// Order is match priority: the first product with an overlapping keyword
/// wins, so broad entries ("butter", "oil") shadow narrower ones listed
/// later ("peanut butter", "sesame oil"). An empty URL marks a product
/// without a shop link yet.
pub(crate) fn default_products() -> Vec<AffiliateProduct> {
    vec![
        product(
            &["self-raising flour", "tepung naik sendiri", "all purpose flour", "tepung serbaguna", "baking powder"],
            "https://s.shopee.com.my/2LOPE1Xhz6",
            "Tepung / Flour",
        ),
        product(
            &["tepung gandum", "wheat flour", "plain flour"],
            "https://s.shopee.com.my/5pyHONqeUP",
            "Tepung Gandum",
        ),
        product(
            &["tepung jagung", "corn flour", "cornstarch", "tepung ubi kayu"],
            "https://s.shopee.com.my/AUk6wwLkPA",
            "Tepung Jagung",
        ),
        product(
            &["baking powder", "serbuk penaik"],
            "https://s.shopee.com.my/AA7GYNZD57",
            "Baking Powder",
        ),
        product(
            &["margarin", "margarine", "butter", "mentega"],
            "",
            "Margarin / Butter",
        ),
        product(
            &["susu pekat", "susu tin", "susu"],
            "https://s.shopee.com.my/qZbRNvhDu",
            "Susu Segar",
        ),
        product(
            &["santan", "coconut milk", "santan pekat", "santan cair"],
            "https://s.shopee.com.my/10t1dpaRi6",
            "Santan",
        ),
        product(
            &["minyak", "cooking oil", "minyak masak", "oil"],
            "https://s.shopee.com.my/9pUQA5p9ez",
            "Minyak Masak",
        ),
        product(
            &["ayam", "chicken", "daging ayam"],
            "https://s.shopee.com.my/1BCRqBd8Xi",
            "Ayam",
        ),
        product(
            &["telur", "egg", "eggs", "telur ayam"],
            "https://s.shopee.com.my/8Uz2ZjQRjN",
            "Telur",
        ),
        product(
            &["bawang besar", "onion", "bawang merah", "yellow onion"],
            "https://s.shopee.com.my/1qS8dUu1nM",
            "Bawang Besar",
        ),
        product(
            &["bawang putih", "garlic", "garlic cloves"],
            "https://s.shopee.com.my/7fPvaEg4wM",
            "Bawang Putih",
        ),
        product(
            &["tomato", "tomato tin", "canned tomato", "tomato puree"],
            "https://s.shopee.com.my/4q5kD2YnFl",
            "Tomato",
        ),
        product(
            &["timun", "cucumber"],
            "https://s.shopee.com.my/Vwl36POFw",
            "Timun",
        ),
        product(
            &["beras", "rice", "nasi"],
            "https://s.shopee.com.my/gGBFRF9Fi",
            "Beras",
        ),
        product(
            &["rolled oats", "oats", "oat"],
            "https://s.shopee.com.my/802lyvm8hs",
            "Rolled Oats",
        ),
        product(
            &["sos tiram", "oyster sauce"],
            "https://s.shopee.com.my/7ATezPbMgs",
            "Sos Tiram",
        ),
        product(
            &["kicap manis", "sweet soy sauce", "dark soy sauce"],
            "https://s.shopee.com.my/AUk6xYSOcL",
            "Kicap Manis",
        ),
        product(
            &["garam", "salt"],
            "https://s.shopee.com.my/9AEjN7LAuX",
            "Garam",
        ),
        product(
            &["gula", "sugar", "white sugar"],
            "https://s.shopee.com.my/5ferCo8ie3r",
            "Gula",
        ),
        product(
            &["gula merah", "brown sugar", "gula perang"],
            "https://s.shopee.com.my/9UrZlpBuj7",
            "Gula Merah",
        ),
        product(
            &["serai", "lemongrass", "lemon grass"],
            "https://s.shopee.com.my/1VpIFANlU3",
            "Serai",
        ),
        product(
            &["daun limau purut", "kaffir lime leaves", "lime leaves"],
            "https://s.shopee.com.my/5VLR0Y33RZ",
            "Daun Limau Purut",
        ),
        product(
            &["daun kunyit", "turmeric leaves"],
            "https://s.shopee.com.my/3LGwQaTBY5",
            "Daun Kunyit",
        ),
        product(
            &["daun pandan", "pandan leaves"],
            "https://s.shopee.com.my/2qKfph3Owh",
            "Daun Pandan",
        ),
        product(
            &["vanilla essence", "vanilla extract"],
            "https://s.shopee.com.my/5L20oXxFfU",
            "Vanilla Essence",
        ),
        product(
            &["chia seeds", "biji chia"],
            "https://s.shopee.com.my/LdKrNnyoq",
            "Chia Seeds",
        ),
        product(
            &["kacang tanah", "peanuts", "groundnuts"],
            "https://s.shopee.com.my/70AEneB4A4",
            "Kacang Tanah",
        ),
        product(
            &["peanut butter"],
            "https://s.shopee.com.my/2VhpROWseO",
            "Peanut Butter",
        ),
        product(
            &["ikan bilis", "anchovies", "dried anchovies"],
            "https://s.shopee.com.my/9KY9Zy2PGj",
            "Ikan Bilis",
        ),
        product(
            &["pisang", "banana"],
            "https://s.shopee.com.my/2LOPF7EQ9H",
            "Pisang",
        ),
        product(
            &["blueberry", "blueberries"],
            "https://s.shopee.com.my/5AiacL47lI",
            "Blueberry",
        ),
        product(
            &["buah naga", "dragon fruit"],
            "https://s.shopee.com.my/9AEjNoLP7K",
            "Buah Naga",
        ),
        product(
            &["kurma", "dates"],
            "https://s.shopee.com.my/20lYqf2qoQ",
            "Kurma",
        ),
        product(
            &["honey", "madu"],
            "https://s.shopee.com.my/7Kn5CU0QhL",
            "Honey",
        ),
        product(
            &["maple syrup", "sirap maple"],
            "https://s.shopee.com.my/2VhpRcHfZn",
            "Maple Syrup",
        ),
        product(
            &["sirap gula melaka", "gula melaka syrup", "palm sugar syrup"],
            "https://s.shopee.com.my/9pUQB6pUAt",
            "Sirap Gula Melaka",
        ),
        product(
            &["mee", "noodles", "kuey teow", "bihun", "spaghetti", "pasta"],
            "https://s.shopee.com.my/7V6VP45Ina",
            "Mee / Noodles",
        ),
        product(
            &["maggi", "instant noodles", "mee segera"],
            "https://s.shopee.com.my/50PAQU5Tjt",
            "Maggi / Instant Noodles",
        ),
        product(
            &["sos cili", "chili sauce", "tomato sauce"],
            "https://s.shopee.com.my/2g1FeDaqkb",
            "Sos Cili",
        ),
        product(
            &["mayonnaise", "mayo", "mayonis"],
            "https://s.shopee.com.my/gGBGYe4YK",
            "Mayonnaise",
        ),
        product(
            &["mustard", "sos mustard"],
            "https://s.shopee.com.my/3VaMdmW2pB",
            "Mustard",
        ),
        product(
            &["white pepper", "black pepper", "lada putih", "lada hitam"],
            "https://s.shopee.com.my/7fPvbSgS4S",
            "Lada / Pepper",
        ),
        product(
            &["sesame oil", "minyak bijan"],
            "https://s.shopee.com.my/LdKs6VjXi",
            "Minyak Bijan",
        ),
        product(
            &["kunyit", "turmeric powder", "serbuk kunyit"],
            "https://s.shopee.com.my/7pjLnu80DE",
            "Kunyit",
        ),
        product(
            &["ketumbar", "coriander powder", "serbuk ketumbar"],
            "https://s.shopee.com.my/qZbT3bgTj",
            "Serbuk Ketumbar",
        ),
        product(
            &["chili powder", "cili boh", "serbuk cili"],
            "",
            "Cili Boh / Chili Powder",
        ),
        product(
            &["curry powder", "serbuk kari"],
            "https://s.shopee.com.my/3AxWFNbY6Z",
            "Serbuk Kari",
        ),
        product(
            &["carrot", "lobak merah"],
            "https://s.shopee.com.my/6pqocMz7FL",
            "Carrot",
        ),
        product(
            &["potato", "kentang"],
            "https://s.shopee.com.my/3LGwRxlVc9",
            "Kentang",
        ),
        product(
            &["bean sprouts", "taugeh"],
            "https://s.shopee.com.my/70AEojNwW5",
            "Taugeh",
        ),
        product(
            &["prawn", "udang", "shrimp"],
            "https://s.shopee.com.my/802m0Zoael",
            "Udang",
        ),
        product(
            &["tofu", "tauhu"],
            "https://s.shopee.com.my/1VpIGf87yG",
            "Tauhu",
        ),
        product(
            &["tempeh", "tempe"],
            "https://s.shopee.com.my/3qDD2xyqBv",
            "Tempe",
        ),
        product(
            &["vinegar", "cuka"],
            "https://s.shopee.com.my/1BCRs58S24",
            "Cuka",
        ),
        product(
            &["lime", "limau nipis", "lemon"],
            "https://s.shopee.com.my/10UTx8hw7",
            "Limau Nipis",
        ),
        product(
            &["tamarind", "asam jawa"],
            "https://s.shopee.com.my/8AMCCyH4sl",
            "Asam Jawa",
        ),
        product(
            &["mushroom", "cendawan", "shiitake"],
            "https://s.shopee.com.my/3ftmqiyXyR",
            "Cendawan",
        ),
    ]
}
