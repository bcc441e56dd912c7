//! Rhymes, spelling, opposites and synonyms.

use super::QuestionItem;

pub(super) const ITEMS: &[QuestionItem] = &[
    QuestionItem::new("Which word rhymes with 'Cat'?", "Hat", ["Dog", "Ball", "Car"], 3),
    QuestionItem::new("Which word rhymes with 'Dog'?", "Frog", ["Cat", "Bird", "Fish"], 3),
    QuestionItem::new("What sound does a cow make?", "Moo", ["Woof", "Meow", "Oink"], 3),
    QuestionItem::new("What sound does a dog make?", "Woof", ["Moo", "Meow", "Quack"], 3),
    QuestionItem::new("Which word rhymes with 'Sun'?", "Fun", ["Moon", "Star", "Sky"], 4),
    QuestionItem::new("Which word rhymes with 'Ball'?", "Tall", ["Small", "Big", "Run"], 4),
    QuestionItem::new("Spell the fruit: A_ple", "Apple", ["Aple", "Appel", "Apel"], 5),
    QuestionItem::new("Spell the color: R_d", "Red", ["Rad", "Rid", "Rod"], 5),
    QuestionItem::new("Spell the animal: C_t", "Cat", ["Cot", "Cut", "Cit"], 5),
    QuestionItem::new("What is the opposite of 'Hot'?", "Cold", ["Warm", "Fire", "Ice"], 5),
    QuestionItem::new("What is the opposite of 'Big'?", "Small", ["Huge", "Giant", "Tall"], 5),
    QuestionItem::new("What is the opposite of 'Up'?", "Down", ["Over", "In", "Out"], 5),
    QuestionItem::new("What is the opposite of 'Happy'?", "Sad", ["Angry", "Joy", "Cry"], 5),
    QuestionItem::new("What is the opposite of 'Fast'?", "Slow", ["Quick", "Run", "Speed"], 5),
    QuestionItem::new("Spell the animal: T_ger", "Tiger", ["Tager", "Teger", "Tugger"], 6),
    QuestionItem::new(
        "Spell the animal: El_phant",
        "Elephant",
        ["Elefant", "Eliphant", "Elephent"],
        6,
    ),
    QuestionItem::new("Spell the fruit: B_nana", "Banana", ["Banena", "Benana", "Bonana"], 6),
    QuestionItem::new("Spell the animal: M_nkey", "Monkey", ["Mankey", "Munkey", "Monkee"], 6),
    QuestionItem::new("What is the opposite of 'Day'?", "Night", ["Morning", "Evening", "Noon"], 6),
    QuestionItem::new("What is the opposite of 'Open'?", "Close", ["Shut", "Lock", "Door"], 6),
    QuestionItem::new("What is the opposite of 'Young'?", "Old", ["New", "Baby", "Kid"], 6),
    QuestionItem::new("What is a synonym for 'Start'?", "Begin", ["End", "Stop", "Finish"], 7),
    QuestionItem::new("What is a synonym for 'Fast'?", "Quick", ["Slow", "Late", "Lazy"], 7),
    QuestionItem::new("What is a synonym for 'Big'?", "Large", ["Small", "Tiny", "Short"], 7),
    QuestionItem::new("What is a synonym for 'Smart'?", "Clever", ["Dumb", "Slow", "Weak"], 7),
    QuestionItem::new("What is a synonym for 'Happy'?", "Joyful", ["Sad", "Angry", "Upset"], 7),
    QuestionItem::new("What is a synonym for 'Angry'?", "Mad", ["Happy", "Calm", "Quiet"], 7),
    QuestionItem::new(
        "What is a synonym for 'Beautiful'?",
        "Gorgeous",
        ["Ugly", "Plain", "Simple"],
        8,
    ),
    QuestionItem::new(
        "What is the opposite of 'Ancient'?",
        "Modern",
        ["Old", "Historic", "Classic"],
        8,
    ),
    QuestionItem::new(
        "What is a synonym for 'Brave'?",
        "Courageous",
        ["Scared", "Timid", "Shy"],
        8,
    ),
    QuestionItem::new("Spell correctly:", "Necessary", ["Neccessary", "Necesary", "Neccesary"], 9),
    QuestionItem::new("Spell correctly:", "Beautiful", ["Beautifull", "Beutiful", "Beautful"], 9),
    QuestionItem::new("What is a synonym for 'Enormous'?", "Huge", ["Tiny", "Small", "Mini"], 9),
    QuestionItem::new(
        "What is the opposite of 'Generous'?",
        "Selfish",
        ["Kind", "Giving", "Nice"],
        10,
    ),
    QuestionItem::new(
        "What is a synonym for 'Difficult'?",
        "Challenging",
        ["Easy", "Simple", "Basic"],
        10,
    ),
];
