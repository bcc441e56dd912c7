//! Riddles and trick questions. Most distractors are answers to other riddles.

use super::QuestionItem;

pub(super) const ITEMS: &[QuestionItem] = &[
    QuestionItem::new(
        "What has a face and two hands but no arms or legs?",
        "Clock",
        ["Robot", "Tree", "Table"],
        4,
    ),
    QuestionItem::new(
        "What never asks a question but gets answered all the time?",
        "A telephone",
        ["A coconut", "Guilt", "A keyboard"],
        5,
    ),
    QuestionItem::new(
        "What has words but never speaks?",
        "A book",
        ["An anchor", "A pearl", "Letter V"],
        5,
    ),
    QuestionItem::new(
        "What has a thumb and four fingers but is not a hand?",
        "A glove",
        ["A tongue", "Beads", "Mouth"],
        5,
    ),
    QuestionItem::new(
        "If you have a bowl with six apples and you take away four, how many do you have?",
        "The four you took",
        ["Dozens", "The President", "A friend"],
        5,
    ),
    QuestionItem::new("Where is 11+2=1?", "In watches", ["Dew", "A splinter", "The letter “E”"], 5),
    QuestionItem::new(
        "What three numbers, none of which is zero, give the same result whether they’re added or multiplied?",
        "One, two, and three",
        ["Mouth", "A secret", "A sausage"],
        5,
    ),
    QuestionItem::new(
        "If there are three apples and you take away two, how many apples do you have?",
        "You have two apples",
        ["Concrete floors are hard to crack", "A ton", "Light"],
        5,
    ),
    QuestionItem::new(
        "What bird can lift the most weight?",
        "A crane",
        ["A friend", "A drum", "A pearl"],
        5,
    ),
    QuestionItem::new("What has an eye but cannot see?", "Needle", ["Potato", "Storm", "Bat"], 5),
    QuestionItem::new(
        "If I have it, I don’t share it. If I share it, I don’t have it. What is it?",
        "A secret",
        ["Guilt", "A crane", "A river"],
        6,
    ),
    QuestionItem::new(
        "What has one eye but cannot see?",
        "A needle",
        ["One, two, and three", "A friend", "Nine"],
        6,
    ),
    QuestionItem::new(
        "Why is the math book sad?",
        "Because it has problems",
        ["Outside", "Add a ‘G,’ and it’s gone!", "A mirror"],
        6,
    ),
    QuestionItem::new(
        "What has four wheels and flies?",
        "A garbage truck",
        ["Playing chess with Kate.", "Dictionary", "Few"],
        6,
    ),
    QuestionItem::new(
        "How can you physically stand behind your friend as he physically stands behind you?",
        "Back to back",
        ["A saddle", "A telephone", "Concrete floors are hard to crack"],
        6,
    ),
    QuestionItem::new(
        "April showers bring May flowers. What do May flowers bring?",
        "Pilgrims",
        ["Isle", "A chain", "A television"],
        6,
    ),
    QuestionItem::new(
        "What kind of tree can you carry in your hand?",
        "A palm tree",
        ["A potato", "Back to back", "A crane"],
        6,
    ),
    QuestionItem::new(
        "If it takes eight men ten hours to build a wall, how long would it take four men?",
        "Nothing. The wall is already built",
        ["Equal", "Chicago", "Three: A blonde, a brunette, and a redhead"],
        6,
    ),
    QuestionItem::new(
        "He’s small, but he can climb a tower.",
        "An ant",
        ["A road", "A television", "Coconut trees don’t grow bananas."],
        6,
    ),
    QuestionItem::new(
        "What type of dress can never be worn?",
        "Address",
        ["Uniform", "Suit", "Costume"],
        6,
    ),
    QuestionItem::new(
        "What is full of holes but still can hold water?",
        "Sponge",
        ["Bucket", "Cup", "Net"],
        6,
    ),
    QuestionItem::new(
        "A blue house has blue bricks; a yellow house has yellow bricks. What is a greenhouse made of?",
        "Glass",
        ["A coat of paint", "A starlight", "Tomorrow"],
        7,
    ),
    QuestionItem::new(
        "What are the two things that we can’t eat before breakfast?",
        "Lunch and dinner",
        ["Wisdom", "A cold", "Noon"],
        7,
    ),
    QuestionItem::new(
        "I love to dance and twist and prance, I shake my tail, as away I sail, wingless I fly into the sky. What am I?",
        "A kite",
        ["One, two, and three", "Letter V", "An umbrella"],
        7,
    ),
    QuestionItem::new(
        "How can you lift an elephant with one hand?",
        "You cannot because the elephant does not have hands.",
        ["A peanut", "A rope", "The plate"],
        7,
    ),
    QuestionItem::new(
        "What kind of umbrella do most people carry on a rainy day?",
        "A wet one",
        ["Tomorrow", "Add a ‘G,’ and it’s gone!", "A fence"],
        7,
    ),
    QuestionItem::new(
        "What tastes better than it smells?",
        "A tongue",
        ["Wholesome", "Seven", "December 31; today is January 1."],
        7,
    ),
    QuestionItem::new(
        "What has hands but can’t clap?",
        "A clock",
        ["Dragon", "The hat gets wet", "A cipher key"],
        7,
    ),
    QuestionItem::new(
        "What has a head and a tail but no body?",
        "A coin",
        ["A snowman", "Soul", "Mailbox"],
        7,
    ),
    QuestionItem::new(
        "What has 13 hearts but no other organs?",
        "Pack of cards",
        ["Letter “E”", "A telephone", "A glacier"],
        7,
    ),
    QuestionItem::new(
        "What kind of band never plays music?",
        "A rubber band",
        ["Because it has problems", "A rope", "A chalkboard"],
        7,
    ),
    QuestionItem::new(
        "The captain took a bath without his belly getting wet.",
        "Canoe",
        ["A roof", "Wisdom", "The green elevator"],
        7,
    ),
    QuestionItem::new(
        "What kind of room doesn’t have physical walls?",
        "A chat room",
        ["Corners", "A glove", "An ant"],
        7,
    ),
    QuestionItem::new(
        "What two words, when combined, hold the most letters?",
        "Post office",
        ["An ant", "Beads", "Coconut trees don’t grow bananas."],
        7,
    ),
    QuestionItem::new(
        "What jumps when it walks and sits when it stands?",
        "A Kangaroo",
        ["Glass", "Age", "Nothing"],
        7,
    ),
    QuestionItem::new(
        "What goes up but never comes back down?",
        "Your age",
        ["Balloon", "Rocket", "Bird"],
        7,
    ),
    QuestionItem::new(
        "What has many keys but can't open a door?",
        "Piano",
        ["Locksmith", "Keyboard", "Safe"],
        7,
    ),
    QuestionItem::new(
        "What is a Tornado’s favorite game?",
        "Twister",
        ["A map", "Address", "A teabag"],
        8,
    ),
    QuestionItem::new(
        "I am full of holes, but I can hold water. Who am I?",
        "Sponge",
        ["Guilt", "A snowman", "Heat because you can always catch a cold."],
        8,
    ),
    QuestionItem::new(
        "If a monkey, a squirrel, and a bird are racing to the top of a coconut tree, who will get the banana first?",
        "Coconut trees don’t grow bananas.",
        ["A mirror", "Sponge", "Blame"],
        8,
    ),
    QuestionItem::new(
        "What always goes to bed with its shoes on?",
        "A horse",
        ["Six", "A television", "A mirror"],
        8,
    ),
    QuestionItem::new(
        "What happens if you throw a white hat into the Black Sea?",
        "The hat gets wet",
        ["2 x 2 = 4, 2 + 2 = 4", "Second", "Seven"],
        8,
    ),
    QuestionItem::new(
        "Which bow can’t be tied?",
        "Rainbow",
        ["Glass", "Nothing. The wall is already built", "Outside"],
        8,
    ),
    QuestionItem::new(
        "If two’s company, and three’s a crowd, what are four and five?",
        "Nine",
        ["It sinks", "A map", "A secret"],
        8,
    ),
    QuestionItem::new(
        "What building has the most stories?",
        "The library",
        ["A crane", "Playing chess with Kate.", "Corn"],
        8,
    ),
    QuestionItem::new(
        "What kind of coat is best put on wet?",
        "A coat of paint",
        ["A comb", "You have two apples", "Few"],
        8,
    ),
    QuestionItem::new(
        "Forwards I’m heavy, but backward, I’m not. What am I?",
        "A ton",
        ["A caterpillar", "Playing chess with Kate.", "Seven"],
        8,
    ),
    QuestionItem::new(
        "If you were running a race and passed the person in second place, what place would you be in now?",
        "Second",
        ["A Kangaroo", "A coin", "A seed"],
        8,
    ),
    QuestionItem::new(
        "Mrs. Brown has five daughters. Each of these daughters has a brother. How many children does Mrs. Brown have?",
        "Six",
        ["Toes", "Address", "A glacier"],
        8,
    ),
    QuestionItem::new(
        "The day before yesterday, I was 21, and next year I will be 24. When is my birthday?",
        "December 31; today is January 1.",
        ["A doll", "Edam", "A fire"],
        8,
    ),
    QuestionItem::new(
        "What gets bigger the more you take away?",
        "A hole",
        ["A balloon", "A cloud", "A puzzle"],
        8,
    ),
    QuestionItem::new(
        "What can’t be used until it is broken?",
        "A coconut",
        ["A book", "Flowers", "Wisdom"],
        9,
    ),
    QuestionItem::new(
        "What is it the more you take, the larger it becomes?",
        "A hole",
        ["A coat of paint", "Second", "A stamp"],
        9,
    ),
    QuestionItem::new(
        "What happens when you throw a blue rock into the yellow sea?",
        "It sinks",
        ["Stone", "A drum", "The four you took"],
        9,
    ),
    QuestionItem::new(
        "What ship has no captain but two mates?",
        "Courtship",
        ["Your back", "Breath", "Light"],
        9,
    ),
    QuestionItem::new(
        "What has legs but doesn’t walk?",
        "A table",
        ["Towel", "A splinter", "Wholesome"],
        9,
    ),
    QuestionItem::new(
        "What has lots of eyes but can’t see?",
        "A potato",
        ["A stamp", "Island", "Nine"],
        9,
    ),
    QuestionItem::new(
        "What’s as big as an elephant but weighs absolutely nothing?",
        "Elephant’s shadow",
        ["Silence", "2 x 2 = 4, 2 + 2 = 4", "The hat gets wet"],
        9,
    ),
    QuestionItem::new(
        "I am an odd number. Take away one letter and I become even. What number am I?",
        "Seven",
        ["A clock", "Cheese", "The hat gets wet"],
        9,
    ),
    QuestionItem::new(
        "Two fathers and two sons are in a car, yet there are only three people in the car. How?",
        "Grandfather, father, and son",
        ["One is a ghost", "They are twins", "They are brothers"],
        9,
    ),
    QuestionItem::new(
        "What belongs to you but gets used by everyone else more than you?",
        "Your name",
        ["Your phone", "Your money", "Your car"],
        9,
    ),
    QuestionItem::new(
        "How do you make the number one disappear?",
        "Add a ‘G,’ and it’s gone!",
        ["The green elevator", "Rainbow", "A drum"],
        10,
    ),
    QuestionItem::new(
        "If a rooster lays an egg on top of the barn roof, which way will it roll?",
        "Roosters do not lay eggs",
        ["Incorrectly", "A keyboard", "None. All birds fly away"],
        10,
    ),
    QuestionItem::new(
        "Which popular cheese is made backward?",
        "Edam",
        ["Parking lot", "The President", "Stone"],
        10,
    ),
    QuestionItem::new(
        "What’s the difference between a well-dressed man on a bicycle and a poorly-dressed man on a tricycle?",
        "A tire",
        ["Elephant’s shadow", "A tongue", "Nothing. The wall is already built"],
        10,
    ),
    QuestionItem::new(
        "It stalks the countryside with ears that can’t hear. What is it?",
        "Corn",
        ["The hat gets wet", "The four you took", "Concrete floors are hard to crack"],
        10,
    ),
    QuestionItem::new(
        "What is all over a house?",
        "A roof",
        ["Sleep at night.", "Seven", "A coin"],
        10,
    ),
    QuestionItem::new(
        "5 5 5 5 5 – Add a symbol somewhere in this row of fives to make an equation equaling 500.",
        "555-55=500",
        ["Equal", "Island", "A tire"],
        10,
    ),
    QuestionItem::new(
        "What is 3/7 chicken, 2/3 cat and 2/4 goat?",
        "Chicago",
        ["A teabag", "Wholesome", "Letter V"],
        10,
    ),
    QuestionItem::new(
        "How can you go 25 days without sleep?",
        "Sleep at night",
        ["Drink coffee", "Stay awake", "Impossible"],
        10,
    ),
    QuestionItem::new(
        "What moves faster: heat or cold?",
        "Heat (you catch a cold)",
        ["Cold", "Neither", "Light"],
        10,
    ),
    QuestionItem::new(
        "What word is spelled incorrectly in every single dictionary?",
        "Incorrectly",
        ["Misspelled", "Wrongly", "Alphabet"],
        10,
    ),
];
