use super::QuestionItem;

pub(super) const ITEMS: &[QuestionItem] = &[
    QuestionItem::new("What color is the sky?", "Blue", ["Red", "Green", "Yellow"], 3),
    QuestionItem::new("What color is grass?", "Green", ["Blue", "Red", "Yellow"], 3),
    QuestionItem::new("How many fingers do you have?", "10", ["5", "8", "12"], 3),
    QuestionItem::new("What animal says 'Meow'?", "Cat", ["Dog", "Cow", "Bird"], 3),
    QuestionItem::new("What animal says 'Woof'?", "Dog", ["Cat", "Pig", "Duck"], 3),
    QuestionItem::new("What do you drink from a cup?", "Water", ["Food", "Air", "Light"], 4),
    QuestionItem::new("What shape is a ball?", "Round", ["Square", "Triangle", "Flat"], 4),
    QuestionItem::new("What do we see at night?", "Stars", ["Sun", "Rainbow", "Clouds"], 4),
    QuestionItem::new("Which animal is a baby sheep?", "Lamb", ["Calf", "Kitten", "Puppy"], 4),
    QuestionItem::new(
        "Which of these animals can jump the highest?",
        "Kangaroo",
        ["Donkey", "Lion", "Giraffe"],
        4,
    ),
    QuestionItem::new(
        "What color do you get mixing Blue and Yellow?",
        "Green",
        ["Red", "Purple", "Orange"],
        5,
    ),
    QuestionItem::new(
        "What color do you get mixing Red and Yellow?",
        "Orange",
        ["Green", "Purple", "Blue"],
        5,
    ),
    QuestionItem::new("How many legs does a dog have?", "4", ["2", "6", "8"], 5),
    QuestionItem::new("What do bees make?", "Honey", ["Milk", "Silk", "Wool"], 5),
    QuestionItem::new("Where do fish live?", "Water", ["Trees", "Caves", "Sky"], 5),
    QuestionItem::new("What comes after Monday?", "Tuesday", ["Wednesday", "Sunday", "Friday"], 5),
    QuestionItem::new("What is the color of a banana?", "Yellow", ["Red", "Blue", "Green"], 5),
    QuestionItem::new(
        "Who is the first Indian woman in space?",
        "Kalpana Chawla",
        ["Chitra Mandal", "Helen Keller", "Sarojini Naidu"],
        5,
    ),
    QuestionItem::new(
        "What do you call a house made of ice?",
        "Igloo",
        ["Tent", "Cabin", "Hut"],
        5,
    ),
    QuestionItem::new("How many legs does a spider have?", "8", ["6", "4", "10"], 6),
    QuestionItem::new(
        "Which season comes after winter?",
        "Spring",
        ["Summer", "Autumn", "Winter"],
        6,
    ),
    QuestionItem::new("What do cows drink?", "Water", ["Milk", "Juice", "Tea"], 6),
    QuestionItem::new(
        "What are the colours of a rainbow?",
        "Violet, Indigo, Blue, Green, Yellow, Orange, Red",
        ["Blue, Green, Yellow, Red, Orange, White, Purple", "Blue, Pink, Orange, Yellow, Red, Magenta, Maroon", "Maroon, Purple, Violet, Pink, Yellow, Red, Orange"],
        6,
    ),
    QuestionItem::new(
        "Which is the highest mountain range in the world?",
        "Himalayas",
        ["Urals", "Rockies", "Andes"],
        6,
    ),
    QuestionItem::new(
        "Which animal is known as the 'Ship of the Desert'?",
        "Camel",
        ["Horse", "Elephant", "Donkey"],
        6,
    ),
    QuestionItem::new("Which animal is the fastest?", "Cheetah", ["Lion", "Tiger", "Elephant"], 7),
    QuestionItem::new(
        "Which is the biggest animal on land?",
        "Elephant",
        ["Giraffe", "Lion", "Bear"],
        7,
    ),
    QuestionItem::new("What do plants need to grow?", "Sunlight", ["Darkness", "Ice", "Fire"], 7),
    QuestionItem::new("How many colors are in a rainbow?", "7", ["5", "6", "8"], 7),
    QuestionItem::new("What is frozen water called?", "Ice", ["Steam", "Cloud", "Rain"], 7),
    QuestionItem::new("Which planet do we live on?", "Earth", ["Mars", "Moon", "Sun"], 7),
    QuestionItem::new("How many days in a week?", "7", ["5", "6", "10"], 7),
    QuestionItem::new(
        "Which is the longest snake in the world?",
        "Python",
        ["Garter", "Cobra", "Rattle snake"],
        7,
    ),
    QuestionItem::new(
        "What converts carbon dioxide into oxygen?",
        "Plant",
        ["Air", "Soil", "Light"],
        7,
    ),
    QuestionItem::new("Where does wool come from?", "Sheep", ["Goat", "Lemur", "Rabbit"], 7),
    QuestionItem::new(
        "How many consonants are there in the English alphabet?",
        "21",
        ["26", "5", "20"],
        7,
    ),
    QuestionItem::new(
        "What is the largest land animal?",
        "Elephant",
        ["Whale", "Giraffe", "Hippo"],
        8,
    ),
    QuestionItem::new("How many days in a year?", "365", ["360", "100", "500"], 8),
    QuestionItem::new("Which season is coldest?", "Winter", ["Summer", "Spring", "Autumn"], 8),
    QuestionItem::new(
        "Which of the following is a non-renewable resource?",
        "Coal",
        ["Sunlight", "Wind", "Water"],
        8,
    ),
    QuestionItem::new(
        "Which country is called the land of the rising sun?",
        "Japan",
        ["India", "China", "Australia"],
        8,
    ),
    QuestionItem::new(
        "Which planet is closest to the Sun?",
        "Mercury",
        ["Venus", "Earth", "Mars"],
        9,
    ),
    QuestionItem::new("What is the largest planet?", "Jupiter", ["Saturn", "Neptune", "Earth"], 9),
    QuestionItem::new("Which gas do we breathe?", "Oxygen", ["Carbon", "Nitrogen", "Helium"], 9),
    QuestionItem::new("How many continents are there?", "7", ["5", "6", "8"], 9),
    QuestionItem::new(
        "What is the capital of India?",
        "New Delhi",
        ["Mumbai", "Kolkata", "Chennai"],
        9,
    ),
    QuestionItem::new("How many planets in our solar system?", "8", ["9", "7", "10"], 9),
    QuestionItem::new(
        "Which two parts of the body continue to grow for your entire life?",
        "Nose and Ears",
        ["Hands and Feet", "Eyes and Teeth", "Hair and Nails"],
        9,
    ),
    QuestionItem::new(
        "Who is the inventor of the Computer?",
        "Charles Babbage",
        ["Albert Einstein", "Isaac Newton", "Thomas Edison"],
        9,
    ),
    QuestionItem::new(
        "Which is the largest ocean?",
        "Pacific",
        ["Atlantic", "Indian", "Arctic"],
        10,
    ),
    QuestionItem::new("What is the capital of France?", "Paris", ["London", "Rome", "Berlin"], 10),
    QuestionItem::new(
        "What is the capital of USA?",
        "Washington DC",
        ["New York", "Los Angeles", "Chicago"],
        10,
    ),
    QuestionItem::new(
        "What is the largest country by area?",
        "Russia",
        ["China", "USA", "Canada"],
        10,
    ),
    QuestionItem::new("How many bones in the human body?", "206", ["200", "150", "300"], 10),
    QuestionItem::new(
        "Which is the longest river?",
        "Nile",
        ["Amazon", "Ganges", "Mississippi"],
        10,
    ),
    QuestionItem::new(
        "What is the hardest natural substance?",
        "Diamond",
        ["Gold", "Iron", "Silver"],
        10,
    ),
];
