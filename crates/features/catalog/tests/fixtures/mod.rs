#![allow(dead_code)]

use apb_domain::experience::Experience;
use apb_domain::info::{InfoRecord, InfoReference};
use apb_domain::rank::RawRank;
use serde_json::{Value, json};

pub fn info(
    id: &str,
    main_id: &str,
    title: &str,
    fact: &str,
    icon: &str,
    order: &str,
    item_order: &str,
) -> InfoRecord {
    InfoRecord {
        info_id: id.to_owned(),
        main_id: main_id.to_owned(),
        product_info_title: title.to_owned(),
        product_info: fact.to_owned(),
        icon: icon.to_owned(),
        order: Some(RawRank::from(order)),
        item_order: Some(RawRank::from(item_order)),
        ..InfoRecord::default()
    }
}

pub fn experience_with(references: &[(&str, &str, &str)]) -> Experience {
    let mut experience = Experience {
        product_id: "p-1".to_owned(),
        name: "Caminata a la cascada Escondida".to_owned(),
        slug: "cascada-escondida".to_owned(),
        ..Experience::default()
    };
    for (key, info_id, main_id) in references {
        experience.info.insert((*key).to_owned(), InfoReference::new(*info_id, *main_id));
    }
    experience
}

/// A document tree shaped like a store export.
pub fn snapshot() -> Value {
    json!({
        "projects": {
            "proj_rsK6jYGJzKf9mkbruz2oe6": {
                "data": {
                    "experiences": {
                        "exp_02": {
                            "product_id": "p-2",
                            "name": "Tour de Aventura en Río Claro",
                            "slug": "aventura-rio-claro",
                            "zone": "Río Claro",
                            "state": "Antioquia",
                            "price": "210000",
                            "info": {}
                        },
                        "exp_01": {
                            "product_id": "p-1",
                            "name": "Caminata a la cascada Escondida",
                            "slug": "cascada-escondida",
                            "description": "Caminata ecológica hacia una cascada escondida.",
                            "zone": "San Francisco",
                            "state": "Cundinamarca",
                            "category": "Naturaleza",
                            "price": 140000,
                            "duration": "4",
                            "duration_type": "horas",
                            "meeting_point": "Parque principal",
                            "meeting_time": "7:00 am",
                            "meeting_point_latitude": 4.97,
                            "meeting_point_longitude": -74.29,
                            "maximum_visitors": 12,
                            "attraction_cards": {
                                "a1": { "reason": "Cascada de 40 metros" },
                                "a2": { "reason": "Bosque de niebla" }
                            },
                            "expectation_images": { "x1": { "image": "https://example.org/cascada.jpg" } },
                            "plan": {
                                "p1": {
                                    "title": "Caminata",
                                    "description": "Sendero de 6 km",
                                    "order": "2"
                                },
                                "p2": {
                                    "title": "Encuentro",
                                    "description": "Parque principal",
                                    "order": 1
                                }
                            },
                            "info": {
                                "r1": { "info_id": "info_lang_es", "main_id": "languages" },
                                "r2": { "info_id": "info_guide", "main_id": "facilities" },
                                "r3": { "info_id": "info_water", "main_id": "facilities" },
                                "r4": { "info_id": "info_gone", "main_id": "facilities" },
                                "r5": { "info_id": "info_time", "main_id": "schedule" },
                                "r6": { "info_id": "info_lang_en", "main_id": "languages" },
                                "r7": { "info_id": "info_drone", "main_id": "facilities" }
                            }
                        },
                        "exp_03": { "name": "Borrador sin identificador" }
                    },
                    "z_btc_info": {
                        "info_lang_es": {
                            "main_id": "languages",
                            "product_info": "Español",
                            "icon": "Languages"
                        },
                        "info_lang_en": {
                            "main_id": "languages",
                            "product_info": "Inglés",
                            "icon": "Languages"
                        },
                        "info_guide": {
                            "main_id": "facilities",
                            "product_info_title": "Incluye",
                            "product_info": "Guía local",
                            "icon": "Users", "order": "1", "item_order": "2"
                        },
                        "info_water": {
                            "main_id": "facilities",
                            "product_info_title": "Incluye",
                            "product_info": "Hidratación",
                            "icon": "Droplets", "order": "1", "item_order": "1"
                        },
                        "info_time": {
                            "main_id": "schedule",
                            "product_info_title": "Horario",
                            "product_info": "Salida 7:00 am",
                            "icon": "Clock", "order": "2", "item_order": "1"
                        },
                        "info_drone": {
                            "main_id": "facilities",
                            "product_info_title": "Extras",
                            "product_info": "Fotos con dron",
                            "icon": "Drone", "order": "3", "item_order": "1"
                        }
                    }
                }
            }
        }
    })
}
