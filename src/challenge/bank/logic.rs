//! Reasoning questions: odd-one-out, analogies, simple deductions.

use super::QuestionItem;

pub(super) const ITEMS: &[QuestionItem] = &[
    QuestionItem::new("Which of these is an animal?", "Cow", ["Table", "Apple", "Car"], 3),
    QuestionItem::new("Which item is used to eat?", "Spoon", ["Shoe", "Book", "Hat"], 3),
    QuestionItem::new("Which is smaller?", "Mouse", ["Elephant", "Lion", "Bear"], 4),
    QuestionItem::new("What goes with a lock?", "Key", ["Wallet", "Phone", "Box"], 4),
    QuestionItem::new("What are clothes made of?", "Cloth", ["Wood", "Glass", "Paper"], 4),
    QuestionItem::new("What tastes most sour?", "Lemon", ["Apple", "Banana", "Orange"], 4),
    QuestionItem::new("What do you use an umbrella for?", "Rain", ["Sun", "Wind", "Snow"], 5),
    QuestionItem::new(
        "If a square has 4 sides, a triangle has...",
        "3 sides",
        ["4 sides", "5 sides", "6 sides"],
        5,
    ),
    QuestionItem::new("What tells you the time?", "Clock", ["Book", "Pen", "Shoe"], 5),
    QuestionItem::new(
        "Which of the following items is used while making concrete?",
        "Sand",
        ["Mud", "Plaster", "Asphalt"],
        5,
    ),
    QuestionItem::new(
        "Which is used when playing baseball?",
        "Mitt",
        ["Basket", "Racket", "Stick"],
        5,
    ),
    QuestionItem::new("Which is the odd one out?", "Car", ["Apple", "Banana", "Orange"], 6),
    QuestionItem::new(
        "Which is used for making holes in wood?",
        "Drill",
        ["Pliers", "Hammer", "Plane"],
        6,
    ),
    QuestionItem::new("Bird is to Fly as Fish is to...", "Swim", ["Walk", "Run", "Crawl"], 7),
    QuestionItem::new("Happy is to Smile as Sad is to...", "Cry", ["Laugh", "Anger", "Yell"], 7),
    QuestionItem::new("Sun is to Day as Moon is to...", "Night", ["Sky", "Star", "Cloud"], 7),
    QuestionItem::new(
        "Which did people invent first?",
        "Boats",
        ["Cars", "Airplanes", "Trains"],
        7,
    ),
    QuestionItem::new(
        "If you have 2 apples, get 3 more, then eat 1. How many left?",
        "4",
        ["5", "3", "6"],
        8,
    ),
    QuestionItem::new(
        "If you are outside and your shadow is in front of you, the sun is?",
        "Behind you",
        ["In front of you", "Over your head", "On the side"],
        8,
    ),
    QuestionItem::new(
        "Which cannot go around the earth?",
        "The Sun",
        ["The moon", "A boat", "A plane"],
        8,
    ),
    QuestionItem::new(
        "Book is to Reading as Fork is to...",
        "Eating",
        ["Cooking", "Drawing", "Sleeping"],
        9,
    ),
    QuestionItem::new("If A > B, and B > C, who is the smallest?", "C", ["A", "B", "None"], 9),
    QuestionItem::new("What is the next number: 2, 4, 8, 16, ?", "32", ["24", "20", "18"], 9),
    QuestionItem::new("Puppy is to Dog as Kitten is to...", "Cat", ["Lion", "Tiger", "Mouse"], 9),
    QuestionItem::new("Which is largest?", "Cell", ["Electron", "Atom", "Molecule"], 9),
    QuestionItem::new("What is the next number: 10, 30, 50, 70, ?", "90", ["80", "100", "110"], 10),
];
