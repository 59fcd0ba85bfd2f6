//! Static display catalogs.
//!
//! Each category ships a fixed list of products with description, price
//! label and image. These lists are never mutated and are not backed by the
//! store; the only link to store records is name matching at search time.

use catalogo_core::category::Category;
use serde::Serialize;

/// A product as shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub nombre: &'static str,
    pub descripcion: &'static str,
    pub precio: &'static str,
    pub imagen: &'static str,
}

const fn record(
    nombre: &'static str,
    descripcion: &'static str,
    precio: &'static str,
    imagen: &'static str,
) -> DisplayRecord {
    DisplayRecord {
        nombre,
        descripcion,
        precio,
        imagen,
    }
}

/// The static list for a category, in display order.
pub fn display_catalog(category: Category) -> &'static [DisplayRecord] {
    match category {
        Category::Carnes => CARNES,
        Category::Importados => IMPORTADOS,
        Category::Lacteos => LACTEOS,
    }
}

static CARNES: &[DisplayRecord] = &[
    record(
        "Carne de Res Molida 1lb",
        "Fresca y lista para hamburguesas o guisos.",
        "Lps. 85",
        "assets/Carnes.jpg",
    ),
    record(
        "Bistec de Res 1lb",
        "Cortes tiernos para freír o asar.",
        "Lps. 110",
        "https://tacisa.com/wp-content/uploads/2016/10/bistec-culata-espalda-ternera-1aB-BG1092.jpg",
    ),
    record(
        "Costilla de Res 1lb",
        "Perfecta para sopas y parrilladas.",
        "Lps. 95",
        "https://super-del-corral.myshopify.com/cdn/shop/products/2001015000000_4087x.jpg?v=1589040161",
    ),
    record(
        "Pollo Entero 1kg",
        "Económico, ideal para comidas familiares.",
        "Lps. 70",
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTcFXAG_w9S684VBA-QOTLYewiujSewgbUPxw&s",
    ),
    record(
        "Pechuga de Pollo 1lb",
        "Jugosa y sin hueso, lista para cocinar.",
        "Lps. 75",
        "https://www.gastronomiaycia.com/wp-content/uploads/2017/06/pechugas_madera.jpg",
    ),
    record(
        "Piernas de Pollo 1lb",
        "Sabor tradicional, ideal para guisos y frituras.",
        "Lps. 65",
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRgcPS70bFWcQW8nt6RINAFBeiVLKh5Xfmxnw&s",
    ),
    record(
        "Chuleta de Cerdo 1lb",
        "Fresca, jugosa y lista para la plancha.",
        "Lps. 90",
        "https://okdiario.com/img/recetas/2017/07/25/chuletas-de-cerdo-4.jpg",
    ),
    record(
        "Costilla de Cerdo 1lb",
        "Ideal para barbacoas y asados.",
        "Lps. 95",
        "https://minervafoods.com/wp-content/uploads/2022/12/costela_de_porco_inteira-1.jpg",
    ),
    record(
        "Longaniza Artesanal 1lb",
        "Hecha con receta casera y especias naturales.",
        "Lps. 80",
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQQmonyKvc6fqXqj2qC0GC2qVTB4VxKhLHFxg&s",
    ),
    record(
        "Filete de Pescado 1lb",
        "Fresco y sin espinas, perfecto para empanizar o asar.",
        "Lps. 100",
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRUPoeJvjbfs4F8aXYfa_LRqmqsdbxt5gwBpA&s",
    ),
];

static IMPORTADOS: &[DisplayRecord] = &[
    record(
        "Aceite de Oliva Extra Virgen 500ml (España)",
        "Puro y aromático, ideal para ensaladas.",
        "Lps. 145",
        "https://i5.walmartimages.com.mx/gr/images/product-images/img_large/00841066007460L.jpg",
    ),
    record(
        "Pasta Italiana Spaghetti 500g (Italia)",
        "Tradicional, de cocción al dente.",
        "Lps. 65",
        "https://m.media-amazon.com/images/I/71KivvbEzKL._UF894,1000_QL80_.jpg",
    ),
    record(
        "Salsa de Soya 1L (Japón)",
        "Sabor auténtico para marinar y cocinar.",
        "Lps. 120",
        "https://www.cocinista.es/download/bancorecursos/productos4/10606a-salsa-soja-daisho-1l.jpg",
    ),
    record(
        "Queso Mozzarella 500g (Italia)",
        "Suave y perfecto para pizzas.",
        "Lps. 160",
        "https://www.vamosacomer.eu/wp-content/uploads/2025/02/Lo-que-necesitas-saber-sobre-la-Mozzarella-italiana.jpg",
    ),
    record(
        "Café Colombiano 250g (Colombia)",
        "Aroma intenso y sabor único.",
        "Lps. 135",
        "https://resources.claroshop.com/medios-plazavip/t1/1715658199CafeLiofilisado1jpg",
    ),
    record(
        "Chocolate Suizo 100g (Suiza)",
        "Cremoso y de alta calidad.",
        "Lps. 90",
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQhq7JDhnVSrRrSCmXr_V8ui3r6htad8j5VLA&s",
    ),
    record(
        "Vino Tinto 750ml (Chile)",
        "Suave y frutal, excelente para acompañar carnes.",
        "Lps. 280",
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRVE9A-6MfGkkf5w5BYEplYzIn2uSdpJPXttw&s",
    ),
    record(
        "Atún en Aceite 170g (Ecuador)",
        "Conserva de pescado premium.",
        "Lps. 60",
        "https://www.supermercadosantamaria.com/documents/10180/10504/140753080_G.jpg",
    ),
    record(
        "Miel de Maple 250ml (Canadá)",
        "Dulce natural, perfecto para pancakes.",
        "Lps. 150",
        "https://dcdn-us.mitiendanube.com/stores/495/644/products/maple-syrup-jarabe-de-maple-de-canada-x-250-cc-d_nq_np_723901-mla31353019871_072019-f1-20d2ac0889f5e79e5d15868152095995-640-0.jpg",
    ),
    record(
        "Galletas Danesas de Mantequilla 454g (Dinamarca)",
        "Clásicas y crujientes.",
        "Lps. 180",
        "https://okdiario.com/img/recetas/2016/11/22/galletas-danesas.jpg",
    ),
];

static LACTEOS: &[DisplayRecord] = &[
    record(
        "Leche Entera Pasteurizada 1L",
        "Leche fresca y nutritiva, ideal para consumo diario.",
        "Lps. 28",
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSPNiA6tuYOUOwQZn5bL0HgNHW73Up_ch29Wg&s",
    ),
    record(
        "Leche Deslactosada 1L",
        "Especial para personas intolerantes a la lactosa.",
        "Lps. 32",
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQwzH5i95-tJp-c5dPDgJyYbDlytejSVXeoCg&s",
    ),
    record(
        "Yogurt Natural 500ml",
        "Cremoso y ligero, perfecto para desayunos y meriendas.",
        "Lps. 40",
        "https://walmarthn.vtexassets.com/arquivos/ids/671550/10431_02.jpg?v=638859570549500000",
    ),
    record(
        "Yogurt con Frutas 1L",
        "Mezcla de yogurt natural con trozos de fruta.",
        "Lps. 55",
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSa-aMS-ASz-6admn9NLmJIRjLssvX8lzuEYw&s",
    ),
    record(
        "Queso Fresco 500g",
        "Suave, artesanal, ideal para pupusas y comidas caseras.",
        "Lps. 65",
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSbPhaMJYebmi-NpInwWwJMjuaxRbQdZ09iAA&s",
    ),
    record(
        "Queso Seco 500g",
        "Textura firme, perfecto para rallar en comidas.",
        "Lps. 75",
        "https://www.buenprovecho.hn/wp-content/uploads/2023/08/queso-seco-1.png",
    ),
    record(
        "Mantequilla 400g",
        "Cremosa, con sabor casero.",
        "Lps. 38",
        "https://sula.hn/wp-content/uploads/2020/04/0012_productos-sula-mantequilla-amarilla-400g.jpg",
    ),
    record(
        "Quesillo 500g",
        "Suave y elástico, excelente para tacos y pupusas.",
        "Lps. 70",
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRLCPzwwc1V4FNbsIl0J-f9Oam79xnojLeBIA&s",
    ),
    record(
        "Crema 500ml",
        "Fresca y espesa, perfecta para acompañar platillos típicos.",
        "Lps. 45",
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRD9D-GeuNw2D_Y6Wy61fl-p9P1lIXSWv6YlA&s",
    ),
    record(
        "Leche en Polvo 1kg",
        "Ideal para preparar bebidas y postres.",
        "Lps. 120",
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcR7iKgqP-lLRQMFvnrp_M0AfDRT4bnMrtZboA&s",
    ),
];
