//! Single words and short phrases, tagged with the target language.

use super::{Language, QuestionItem};

const fn spanish(
    prompt: &'static str,
    correct: &'static str,
    wrong: [&'static str; 3],
    min_age: u32,
) -> QuestionItem {
    QuestionItem::translation(prompt, correct, wrong, min_age, Language::Spanish)
}

const fn french(
    prompt: &'static str,
    correct: &'static str,
    wrong: [&'static str; 3],
    min_age: u32,
) -> QuestionItem {
    QuestionItem::translation(prompt, correct, wrong, min_age, Language::French)
}

const fn german(
    prompt: &'static str,
    correct: &'static str,
    wrong: [&'static str; 3],
    min_age: u32,
) -> QuestionItem {
    QuestionItem::translation(prompt, correct, wrong, min_age, Language::German)
}

const fn hindi(
    prompt: &'static str,
    correct: &'static str,
    wrong: [&'static str; 3],
    min_age: u32,
) -> QuestionItem {
    QuestionItem::translation(prompt, correct, wrong, min_age, Language::Hindi)
}

pub(super) const ITEMS: &[QuestionItem] = &[
    spanish("Translate 'DOG' to Spanish", "Perro", ["Gato", "Pajaro", "Pez"], 5),
    spanish("Translate 'CAT' to Spanish", "Gato", ["Perro", "Raton", "Leon"], 5),
    spanish("Translate 'HELLO' to Spanish", "Hola", ["Adios", "Gracias", "Si"], 5),
    spanish("Translate 'GOODBYE' to Spanish", "Adios", ["Hola", "Gracias", "Por favor"], 5),
    spanish("Translate 'WATER' to Spanish", "Agua", ["Leche", "Jugo", "Cafe"], 5),
    spanish("Translate 'RED' to Spanish", "Rojo", ["Azul", "Verde", "Negro"], 5),
    spanish("Translate 'YELLOW' to Spanish", "Amarillo", ["Verde", "Azul", "Rojo"], 5),
    spanish("Translate 'WHITE' to Spanish", "Blanco", ["Negro", "Rojo", "Azul"], 5),
    spanish("Translate 'BLACK' to Spanish", "Negro", ["Blanco", "Amarillo", "Verde"], 5),
    spanish("Translate 'ONE' to Spanish", "Uno", ["Dos", "Tres", "Cuatro"], 5),
    spanish("Translate 'TWO' to Spanish", "Dos", ["Uno", "Tres", "Cinco"], 5),
    spanish("Translate 'THREE' to Spanish", "Tres", ["Uno", "Dos", "Cuatro"], 5),
    spanish("Translate 'FOUR' to Spanish", "Cuatro", ["Dos", "Tres", "Cinco"], 5),
    spanish("Translate 'FIVE' to Spanish", "Cinco", ["Uno", "Tres", "Cuatro"], 5),
    spanish("Translate 'MUM' to Spanish", "Mama", ["Papa", "Hermana", "Abuela"], 5),
    spanish("Translate 'DAD' to Spanish", "Papa", ["Mama", "Hermano", "Abuelo"], 5),
    spanish("Translate 'MILK' to Spanish", "Leche", ["Agua", "Jugo", "Pan"], 6),
    spanish("Translate 'BLUE' to Spanish", "Azul", ["Rojo", "Verde", "Amarillo"], 6),
    spanish("Translate 'GREEN' to Spanish", "Verde", ["Rojo", "Azul", "Blanco"], 6),
    spanish("Translate 'BANANA' to Spanish", "Platano", ["Manzana", "Naranja", "Uva"], 6),
    spanish("Translate 'APPLE' to Spanish", "Manzana", ["Platano", "Naranja", "Pera"], 6),
    spanish(
        "Translate 'GOOD MORNING' to Spanish",
        "Buenos dias",
        ["Buenas noches", "Hola", "Adios"],
        6,
    ),
    spanish(
        "Translate 'GOOD NIGHT' to Spanish",
        "Buenas noches",
        ["Buenos dias", "Hola", "Adios"],
        6,
    ),
    spanish("Translate 'BIRD' to Spanish", "Pajaro", ["Pez", "Conejo", "Perro"], 6),
    spanish("Translate 'FISH' to Spanish", "Pez", ["Pajaro", "Gato", "Perro"], 6),
    spanish("Translate 'RABBIT' to Spanish", "Conejo", ["Gato", "Pez", "Pajaro"], 6),
    spanish("Translate 'BROTHER' to Spanish", "Hermano", ["Hermana", "Papa", "Abuelo"], 6),
    spanish("Translate 'SISTER' to Spanish", "Hermana", ["Hermano", "Mama", "Abuela"], 6),
    spanish("Translate 'BREAD' to Spanish", "El pan", ["La sopa", "El queso", "La leche"], 6),
    spanish("Translate 'CHEESE' to Spanish", "El queso", ["El pan", "El zumo", "El helado"], 6),
    spanish("Translate 'JUICE' to Spanish", "El zumo", ["El agua", "La leche", "La sopa"], 6),
    spanish("Translate 'ICE CREAM' to Spanish", "El helado", ["El zumo", "El queso", "El pan"], 6),
    spanish("Translate 'SOUP' to Spanish", "La sopa", ["El helado", "El agua", "El zumo"], 6),
    spanish("Translate 'HOUSE' to Spanish", "Casa", ["Carro", "Arbol", "Libro"], 7),
    spanish("Translate 'BOOK' to Spanish", "Libro", ["Casa", "Mesa", "Silla"], 7),
    spanish("Translate 'THANK YOU' to Spanish", "Gracias", ["Hola", "Adios", "Por favor"], 7),
    spanish("Translate 'PLEASE' to Spanish", "Por favor", ["Gracias", "Hola", "Adios"], 7),
    spanish("Translate 'GRANDMOTHER' to Spanish", "Abuela", ["Abuelo", "Mama", "Hermana"], 7),
    spanish("Translate 'GRANDFATHER' to Spanish", "Abuelo", ["Abuela", "Papa", "Hermano"], 7),
    spanish(
        "Translate \"YOU ARE WELCOME\" to Spanish",
        "De nada",
        ["Gracias", "Por favor", "Mucho gusto"],
        7,
    ),
    spanish(
        "Translate \"HOW ARE YOU?\" to Spanish",
        "¿Como estas?",
        ["¿Como te llamas?", "Mucho gusto", "No entiendo"],
        8,
    ),
    spanish(
        "Translate \"MY NAME IS...\" to Spanish",
        "Me llamo...",
        ["Quiero...", "¿Como estas?", "De nada"],
        8,
    ),
    spanish(
        "Translate \"WHAT IS YOUR NAME?\" to Spanish",
        "¿Como te llamas?",
        ["¿Como estas?", "¿Que quieres comer?", "No entiendo"],
        8,
    ),
    spanish(
        "Translate \"NICE TO MEET YOU\" to Spanish",
        "Mucho gusto",
        ["De nada", "No entiendo", "Por favor"],
        8,
    ),
    spanish(
        "Translate \"I DO NOT UNDERSTAND\" to Spanish",
        "No entiendo",
        ["Mucho gusto", "De nada", "Quiero..."],
        8,
    ),
    spanish(
        "Translate \"I WANT...\" to Spanish",
        "Quiero...",
        ["Me llamo...", "De nada", "No entiendo"],
        8,
    ),
    spanish(
        "Translate \"WHAT DO YOU WANT TO EAT?\" to Spanish",
        "¿Que quieres comer?",
        ["¿Como te llamas?", "¿Como estas?", "La cuenta, por favor"],
        9,
    ),
    spanish(
        "Translate \"THE BILL, PLEASE\" to Spanish",
        "La cuenta, por favor",
        ["¿Que quieres comer?", "No entiendo", "Mucho gusto"],
        9,
    ),
    french("Translate 'DOG' to French", "Chien", ["Chat", "Oiseau", "Souris"], 5),
    french("Translate 'CAT' to French", "Chat", ["Chien", "Lion", "Tigre"], 5),
    french("Translate 'HELLO' to French", "Bonjour", ["Au revoir", "Merci", "Oui"], 5),
    french(
        "Translate 'GOODBYE' to French",
        "Au revoir",
        ["Bonjour", "Merci", "S'il vous plait"],
        5,
    ),
    french("Translate 'WATER' to French", "Eau", ["Lait", "Jus", "Pain"], 5),
    french("Translate 'RED' to French", "Rouge", ["Bleu", "Vert", "Noir"], 5),
    french("Translate 'MILK' to French", "Lait", ["Eau", "Jus", "Cafe"], 6),
    french("Translate 'BLUE' to French", "Bleu", ["Rouge", "Vert", "Jaune"], 6),
    french("Translate 'GREEN' to French", "Vert", ["Rouge", "Bleu", "Blanc"], 6),
    french("Translate 'APPLE' to French", "Pomme", ["Banane", "Orange", "Raisin"], 6),
    french("Translate 'YES' to French", "Oui", ["Non", "Merci", "Bonjour"], 6),
    french("Translate 'NO' to French", "Non", ["Oui", "Merci", "Au revoir"], 6),
    french("Translate 'HOUSE' to French", "Maison", ["Voiture", "Arbre", "Livre"], 7),
    french("Translate 'BOOK' to French", "Livre", ["Maison", "Table", "Chaise"], 7),
    french("Translate 'THANK YOU' to French", "Merci", ["Bonjour", "Au revoir", "Oui"], 7),
    german("Translate 'DOG' to German", "Hund", ["Katze", "Vogel", "Maus"], 5),
    german("Translate 'CAT' to German", "Katze", ["Hund", "Löwe", "Tiger"], 5),
    german("Translate 'HELLO' to German", "Hallo", ["Tschüss", "Danke", "Ja"], 5),
    german("Translate 'GOODBYE' to German", "Tschüss", ["Hallo", "Danke", "Bitte"], 5),
    german("Translate 'WATER' to German", "Wasser", ["Milch", "Saft", "Brot"], 5),
    german("Translate 'RED' to German", "Rot", ["Blau", "Grün", "Schwarz"], 5),
    german("Translate 'MILK' to German", "Milch", ["Wasser", "Saft", "Kaffee"], 6),
    german("Translate 'BLUE' to German", "Blau", ["Rot", "Grün", "Gelb"], 6),
    german("Translate 'GREEN' to German", "Grün", ["Rot", "Blau", "Weiß"], 6),
    german("Translate 'APPLE' to German", "Apfel", ["Banane", "Orange", "Birne"], 6),
    german("Translate 'YES' to German", "Ja", ["Nein", "Danke", "Hallo"], 6),
    german("Translate 'NO' to German", "Nein", ["Ja", "Danke", "Tschüss"], 6),
    german("Translate 'HOUSE' to German", "Haus", ["Auto", "Baum", "Buch"], 7),
    german("Translate 'BOOK' to German", "Buch", ["Haus", "Tisch", "Stuhl"], 7),
    german("Translate 'THANK YOU' to German", "Danke", ["Hallo", "Tschüss", "Ja"], 7),
    hindi("Translate 'DOG' to Hindi", "कुत्ता", ["बिल्ली", "शेर", "हाथी"], 5),
    hindi("Translate 'CAT' to Hindi", "बिल्ली", ["कुत्ता", "चूहा", "घोड़ा"], 5),
    hindi("Translate 'HELLO' to Hindi", "नमस्ते", ["धन्यवाद", "हाँ", "नहीं"], 5),
    hindi("Translate 'GOODBYE' to Hindi", "अलविदा", ["नमस्ते", "धन्यवाद", "हाँ"], 5),
    hindi("Translate 'WATER' to Hindi", "पानी", ["दूध", "जूस", "चाय"], 5),
    hindi("Translate 'RED' to Hindi", "लाल", ["नीला", "हरा", "काला"], 5),
    hindi("Translate 'MILK' to Hindi", "दूध", ["पानी", "जूस", "चाय"], 6),
    hindi("Translate 'BLUE' to Hindi", "नीला", ["लाल", "हरा", "पीला"], 6),
    hindi("Translate 'GREEN' to Hindi", "हरा", ["लाल", "नीला", "सफेद"], 6),
    hindi("Translate 'APPLE' to Hindi", "सेब", ["केला", "संतरा", "अंगूर"], 6),
    hindi("Translate 'BANANA' to Hindi", "केला", ["सेब", "संतरा", "आम"], 6),
    hindi("Translate 'YES' to Hindi", "हाँ", ["नहीं", "धन्यवाद", "नमस्ते"], 6),
    hindi("Translate 'NO' to Hindi", "नहीं", ["हाँ", "धन्यवाद", "अलविदा"], 6),
    hindi("Translate 'HOUSE' to Hindi", "घर", ["गाड़ी", "पेड़", "किताब"], 7),
    hindi("Translate 'BOOK' to Hindi", "किताब", ["घर", "मेज", "कुर्सी"], 7),
    hindi("Translate 'THANK YOU' to Hindi", "धन्यवाद", ["नमस्ते", "अलविदा", "हाँ"], 7),
];
