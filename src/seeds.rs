//! Built-in content: the grading table, the book catalog, framework info pages,
//! and the default placement-test question bank.
//!
//! All of it is static and read-only. Only the question bank can be replaced
//! from configuration.

use crate::domain::{AnswerOption, BookRecommendation, GradingLevel, Question, Series, SystemInfo};

/// Ordered by increasing difficulty. Adjacent ranges overlap on purpose.
pub static GRADING_LEVELS: &[GradingLevel] = &[
  GradingLevel {
    oxford_level: "Level 1",
    lexile_range: "BR-70L",
    lexile_min: 0,
    lexile_max: 70,
    cefr: "Pre-A1",
    china_standard: "预备级 (感知)",
    cambridge_exam: "Pre-Starters",
    raz: "aa",
    heinemann: "GK (Level A)",
    age_range: "3-4岁",
    recommended_grade: "学前小班/中班",
  },
  GradingLevel {
    oxford_level: "Level 1+",
    lexile_range: "50L-120L",
    lexile_min: 50,
    lexile_max: 120,
    cefr: "Pre-A1",
    china_standard: "预备级 (积累)",
    cambridge_exam: "Pre-Starters",
    raz: "A",
    heinemann: "GK (Level B-C)",
    age_range: "4-5岁",
    recommended_grade: "学前中班/大班",
  },
  GradingLevel {
    oxford_level: "Level 2",
    lexile_range: "100L-200L",
    lexile_min: 100,
    lexile_max: 200,
    cefr: "Pre-A1",
    china_standard: "预备级 (积累)",
    cambridge_exam: "Starters (YLE)",
    raz: "B",
    heinemann: "GK (Level B-C)",
    age_range: "5-6岁",
    recommended_grade: "学前大班/一年级",
  },
  GradingLevel {
    oxford_level: "Level 3",
    lexile_range: "200L-300L",
    lexile_min: 200,
    lexile_max: 300,
    cefr: "A1",
    china_standard: "一级 (起步)",
    cambridge_exam: "Starters (YLE)",
    raz: "C-D",
    heinemann: "G1 (Level B-D)",
    age_range: "6-7岁",
    recommended_grade: "一年级",
  },
  GradingLevel {
    oxford_level: "Level 4",
    lexile_range: "300L-380L",
    lexile_min: 300,
    lexile_max: 380,
    cefr: "A1",
    china_standard: "一级 (进阶)",
    cambridge_exam: "Movers (YLE)",
    raz: "E-F",
    heinemann: "G1 (Level E-G)",
    age_range: "7-8岁",
    recommended_grade: "一年级/二年级",
  },
  GradingLevel {
    oxford_level: "Level 5",
    lexile_range: "350L-430L",
    lexile_min: 350,
    lexile_max: 430,
    cefr: "A1",
    china_standard: "一级+ (强化)",
    cambridge_exam: "Movers (YLE)",
    raz: "G-H",
    heinemann: "G1 (Level H-J)",
    age_range: "7-8岁",
    recommended_grade: "二年级",
  },
  GradingLevel {
    oxford_level: "Level 6",
    lexile_range: "400L-480L",
    lexile_min: 400,
    lexile_max: 480,
    cefr: "A1+",
    china_standard: "二级 (起步)",
    cambridge_exam: "Flyers (YLE)",
    raz: "I-J",
    heinemann: "G2 (Level C-D)",
    age_range: "8-9岁",
    recommended_grade: "二年级/三年级",
  },
  GradingLevel {
    oxford_level: "Level 7",
    lexile_range: "450L-530L",
    lexile_min: 450,
    lexile_max: 530,
    cefr: "A2",
    china_standard: "二级 (进阶)",
    cambridge_exam: "Flyers (YLE)",
    raz: "K-L",
    heinemann: "G2 (Level E-H)",
    age_range: "8-9岁",
    recommended_grade: "三年级",
  },
  GradingLevel {
    oxford_level: "Level 8",
    lexile_range: "500L-600L",
    lexile_min: 500,
    lexile_max: 600,
    cefr: "A2",
    china_standard: "二级+ (强化)",
    cambridge_exam: "KET (A2 Key)",
    raz: "M-N",
    heinemann: "G2 (Level I-N)",
    age_range: "9-10岁",
    recommended_grade: "三年级/四年级",
  },
  GradingLevel {
    oxford_level: "Level 9",
    lexile_range: "570L-660L",
    lexile_min: 570,
    lexile_max: 660,
    cefr: "A2+",
    china_standard: "三级 (起步)",
    cambridge_exam: "KET (A2 Key)",
    raz: "O-P",
    heinemann: "-",
    age_range: "9-10岁",
    recommended_grade: "四年级",
  },
  GradingLevel {
    oxford_level: "Level 10",
    lexile_range: "620L-720L",
    lexile_min: 620,
    lexile_max: 720,
    cefr: "B1",
    china_standard: "三级 (进阶)",
    cambridge_exam: "PET (B1 Preliminary)",
    raz: "Q-R",
    heinemann: "-",
    age_range: "10-11岁",
    recommended_grade: "四年级/五年级",
  },
  GradingLevel {
    oxford_level: "Level 11",
    lexile_range: "680L-780L",
    lexile_min: 680,
    lexile_max: 780,
    cefr: "B1",
    china_standard: "三级 (进阶)",
    cambridge_exam: "PET (B1 Preliminary)",
    raz: "S-T",
    heinemann: "-",
    age_range: "10-11岁",
    recommended_grade: "五年级",
  },
  GradingLevel {
    oxford_level: "Level 12",
    lexile_range: "740L-840L",
    lexile_min: 740,
    lexile_max: 840,
    cefr: "B1+",
    china_standard: "三级+ (强化)",
    cambridge_exam: "PET (B1 Preliminary)",
    raz: "U-V",
    heinemann: "-",
    age_range: "11-12岁",
    recommended_grade: "五年级/六年级",
  },
  GradingLevel {
    oxford_level: "Level 13",
    lexile_range: "800L-900L",
    lexile_min: 800,
    lexile_max: 900,
    cefr: "B1+",
    china_standard: "三级+ (强化)",
    cambridge_exam: "FCE (B2 First)",
    raz: "W-X",
    heinemann: "-",
    age_range: "11-12岁",
    recommended_grade: "六年级",
  },
  GradingLevel {
    oxford_level: "Level 14",
    lexile_range: "860L-960L",
    lexile_min: 860,
    lexile_max: 960,
    cefr: "B2",
    china_standard: "高中 (必修)",
    cambridge_exam: "FCE (B2 First)",
    raz: "Y-Z",
    heinemann: "-",
    age_range: "12-13岁",
    recommended_grade: "初一",
  },
  GradingLevel {
    oxford_level: "Level 15",
    lexile_range: "920L-1020L",
    lexile_min: 920,
    lexile_max: 1020,
    cefr: "B2",
    china_standard: "高中 (必修)",
    cambridge_exam: "FCE (B2 First)",
    raz: "Z",
    heinemann: "-",
    age_range: "12-13岁",
    recommended_grade: "初一/初二",
  },
  GradingLevel {
    oxford_level: "Level 16",
    lexile_range: "980L-1080L",
    lexile_min: 980,
    lexile_max: 1080,
    cefr: "B2+",
    china_standard: "高中 (选择性必修)",
    cambridge_exam: "FCE (B2 First)",
    raz: "Z1",
    heinemann: "-",
    age_range: "13-14岁",
    recommended_grade: "初二",
  },
  GradingLevel {
    oxford_level: "Level 17",
    lexile_range: "1050L-1150L",
    lexile_min: 1050,
    lexile_max: 1150,
    cefr: "C1",
    china_standard: "高中 (选择性必修)",
    cambridge_exam: "CAE (C1 Advanced)",
    raz: "Z2",
    heinemann: "-",
    age_range: "13-14岁",
    recommended_grade: "初二/初三",
  },
  GradingLevel {
    oxford_level: "Level 18",
    lexile_range: "1100L-1200L",
    lexile_min: 1100,
    lexile_max: 1200,
    cefr: "C1",
    china_standard: "高中 (拓展)",
    cambridge_exam: "CAE (C1 Advanced)",
    raz: "Z2",
    heinemann: "-",
    age_range: "14-15岁",
    recommended_grade: "初三",
  },
  GradingLevel {
    oxford_level: "Level 19",
    lexile_range: "1150L-1250L",
    lexile_min: 1150,
    lexile_max: 1250,
    cefr: "C1+",
    china_standard: "高中 (拓展)",
    cambridge_exam: "CAE (C1 Advanced)",
    raz: "Z2",
    heinemann: "-",
    age_range: "15-16岁",
    recommended_grade: "高一",
  },
  GradingLevel {
    oxford_level: "Level 20",
    lexile_range: "1200L-1300L",
    lexile_min: 1200,
    lexile_max: 1300,
    cefr: "C2",
    china_standard: "高中 (拓展)",
    cambridge_exam: "CPE (C2 Proficiency)",
    raz: "Z2",
    heinemann: "-",
    age_range: "16岁+",
    recommended_grade: "高二+",
  },
];

pub static BOOK_RECOMMENDATIONS: &[BookRecommendation] = &[
  // Oxford Reading Tree
  BookRecommendation {
    id: "ox-l1-1",
    series: Series::Oxford,
    level: "Level 1",
    title: "Kipper's Diary",
    description: "Biff, Chip 和 Kipper 的日常生活故事，适合零基础启蒙。",
    cover_color: "bg-blue-200",
    tags: &["Fiction", "Family", "Humor"],
  },
  BookRecommendation {
    id: "ox-l1p-1",
    series: Series::Oxford,
    level: "Level 1+",
    title: "The Pancake",
    description: "经典的煎饼逃跑故事，词汇简单重复，朗朗上口。",
    cover_color: "bg-blue-300",
    tags: &["Fiction", "Classic", "Food"],
  },
  BookRecommendation {
    id: "ox-l2-1",
    series: Series::Oxford,
    level: "Level 2",
    title: "The Toys' Party",
    description: "Kipper 的玩具们开派对啦！充满想象力的故事。",
    cover_color: "bg-blue-400",
    tags: &["Fiction", "Toys", "Imagination"],
  },
  BookRecommendation {
    id: "ox-l3-1",
    series: Series::Oxford,
    level: "Level 3",
    title: "The Magic Key",
    description: "魔法钥匙第一次发光，带孩子们进入神奇的冒险世界。",
    cover_color: "bg-indigo-300",
    tags: &["Fantasy", "Adventure", "Magic"],
  },
  BookRecommendation {
    id: "ox-l4-1",
    series: Series::Oxford,
    level: "Level 4",
    title: "The Storm",
    description: "一场暴风雨来了，看看孩子们是如何应对的。",
    cover_color: "bg-indigo-400",
    tags: &["Fiction", "Weather", "Family"],
  },
  BookRecommendation {
    id: "ox-l5-1",
    series: Series::Oxford,
    level: "Level 5",
    title: "The Magic of the Key",
    description: "魔法钥匙带孩子们回到了过去，探索历史的奥秘。",
    cover_color: "bg-indigo-500",
    tags: &["Fantasy", "History", "Time Travel"],
  },
  BookRecommendation {
    id: "ox-l6-1",
    series: Series::Oxford,
    level: "Level 6",
    title: "In the Garden",
    description: "花园里的秘密冒险，发现大自然的奇妙。",
    cover_color: "bg-blue-600",
    tags: &["Nature", "Adventure"],
  },
  BookRecommendation {
    id: "ox-l9-1",
    series: Series::Oxford,
    level: "Level 9",
    title: "The Quest",
    description: "更复杂的冒险故事，文字量增加，情节更加曲折。",
    cover_color: "bg-purple-500",
    tags: &["Fantasy", "Quest", "Chapter Book"],
  },
  // Reading A-Z
  BookRecommendation {
    id: "raz-aa-1",
    series: Series::Raz,
    level: "aa",
    title: "Summer Picnic",
    description: "夏季野餐的乐趣，学习基础名词和简单句型。",
    cover_color: "bg-green-200",
    tags: &["Non-fiction", "Summer", "Food"],
  },
  BookRecommendation {
    id: "raz-a-1",
    series: Series::Raz,
    level: "A-B",
    title: "Animals in the Zoo",
    description: "认识动物园里的各种动物，扩展基础词汇。",
    cover_color: "bg-green-300",
    tags: &["Non-fiction", "Animals", "Nature"],
  },
  BookRecommendation {
    id: "raz-c-1",
    series: Series::Raz,
    level: "C-D",
    title: "How Plants Grow",
    description: "了解植物生长的过程，科普入门。",
    cover_color: "bg-green-400",
    tags: &["Science", "Plants", "Nature"],
  },
  BookRecommendation {
    id: "raz-e-1",
    series: Series::Raz,
    level: "E-F",
    title: "The Solar System",
    description: "探索太阳系的奥秘，认识行星。",
    cover_color: "bg-green-500",
    tags: &["Science", "Space", "Astronomy"],
  },
  BookRecommendation {
    id: "raz-g-1",
    series: Series::Raz,
    level: "G",
    title: "All About Spiders",
    description: "关于蜘蛛的一切，适合对生物感兴趣的孩子。",
    cover_color: "bg-teal-400",
    tags: &["Science", "Insects", "Biology"],
  },
  BookRecommendation {
    id: "raz-k-1",
    series: Series::Raz,
    level: "K",
    title: "Volcanoes",
    description: "深入了解火山的成因和危害，地理科普。",
    cover_color: "bg-teal-600",
    tags: &["Geography", "Earth Science"],
  },
  // Heinemann
  BookRecommendation {
    id: "hei-gk-1",
    series: Series::Heinemann,
    level: "GK (Level A)",
    title: "At the Market",
    description: "在市场买东西，重复句型 \"I see...\"。",
    cover_color: "bg-orange-200",
    tags: &["Life", "Shopping", "Vocabulary"],
  },
  BookRecommendation {
    id: "hei-gk-2",
    series: Series::Heinemann,
    level: "GK (Level B-C)",
    title: "Rex",
    description: "关于一只叫 Rex 的恐龙的有趣小故事。",
    cover_color: "bg-orange-300",
    tags: &["Fiction", "Dinosaurs", "Humor"],
  },
  BookRecommendation {
    id: "hei-g1-1",
    series: Series::Heinemann,
    level: "G1 (Level B-D)",
    title: "The Little Red Hen",
    description: "经典童话故事改编，适合初级阅读者。",
    cover_color: "bg-orange-400",
    tags: &["Folktale", "Moral", "Classic"],
  },
  BookRecommendation {
    id: "hei-g2-1",
    series: Series::Heinemann,
    level: "G2 (Level C-D)",
    title: "Mice Squeak, We Speak",
    description: "比较动物和人类的声音，富有韵律感。",
    cover_color: "bg-orange-500",
    tags: &["Poetry", "Animals", "Sounds"],
  },
  // Cambridge readers are listed in the catalog but never recommended by level.
  BookRecommendation {
    id: "cam-movers-1",
    series: Series::Cambridge,
    level: "Movers (YLE)",
    title: "The Big Race",
    description: "配合 Movers 考试词汇的短篇故事，适合考前泛读。",
    cover_color: "bg-red-300",
    tags: &["Fiction", "Sports", "Exam Prep"],
  },
  BookRecommendation {
    id: "cam-ket-1",
    series: Series::Cambridge,
    level: "KET (A2 Key)",
    title: "A Day in London",
    description: "城市旅行主题读物，覆盖 KET 常见场景表达。",
    cover_color: "bg-red-500",
    tags: &["Travel", "City", "Exam Prep"],
  },
];

pub static SYSTEMS_INFO: &[SystemInfo] = &[
  SystemInfo {
    id: "china-standard",
    name: "中国新课标 (2022年版2025年修订)",
    description: "新课标将义务教育阶段的英语课程目标分为三级，并提出了'预备级'以适应学前及低年级需求。",
    features: &[
      "预备级：感知语音，积累基础词汇，培养阅读兴趣",
      "一级：识别拼读规则，理解简单句，约500词",
      "二级：理解段落大意，借助图片推断，约800-1000词",
      "三级：分析语篇结构，评价观点，约1600-2000词",
    ],
    website: None,
  },
  SystemInfo {
    id: "lexile",
    name: "蓝思分级体系 (Lexile)",
    description: "蓝思值是全球通用的文本难度衡量标准，主要基于词汇频率和句法复杂度。",
    features: &[
      "BR (Beginning Reader)：零基础",
      "200L-500L：小学中低年级，句式简单",
      "500L-800L：小学高年级至初中，开始出现从句",
      "800L+：初中及以上，文本结构复杂",
    ],
    website: Some("https://lexile.com/"),
  },
  SystemInfo {
    id: "cefr",
    name: "欧洲语言共同参考框架 (CEFR)",
    description: "CEFR 将语言能力划分为 A1 到 C2 六个等级，是国际通用的语言能力描述标准。",
    features: &[
      "A1-A2：基础使用者，能应对日常简单交流",
      "B1-B2：独立使用者，能理解较复杂的文本",
      "C1-C2：熟练使用者，能流利准确地表达",
      "与剑桥考试体系直接对应",
    ],
    website: Some("https://www.coe.int/en/web/common-european-framework-reference-languages"),
  },
  SystemInfo {
    id: "oxford-tree",
    name: "牛津阅读树 (Oxford Reading Tree)",
    description: "故事性强，人物性格鲜明（Biff, Chip, Kipper），难度曲线L1-L3坡度极缓，L4-L6难度适中，L7-L9难度跃升明显。",
    features: &["连续剧式人物设定", "幽默感强", "适合培养阅读兴趣", "Fiction 为主"],
    website: None,
  },
  SystemInfo {
    id: "raz",
    name: "RAZ (Reading A-Z)",
    description: "体系严密，Non-fiction占比高，百科知识丰富，aa-Z呈线性均匀递增，螺旋式上升。",
    features: &["科学的知识点铺陈", "词汇复现机制", "Non-fiction 占比高", "适合扩展知识面"],
    website: Some("https://www.readinga-z.com/"),
  },
  SystemInfo {
    id: "heinemann",
    name: "海尼曼 (Heinemann)",
    description: "低级别句型重复度高，适合'开口'练习，帮助孩子建立语感。",
    features: &["句型操练模式", "高重复性", "强图片辅助", "适合启蒙阶段"],
    website: None,
  },
  SystemInfo {
    id: "cambridge",
    name: "剑桥英语考试 (Cambridge English)",
    description: "从少儿的 Starters/Movers/Flyers 到 KET、PET、FCE，逐级对应 CEFR 能力等级。",
    features: &[
      "YLE 少儿系列：Pre-A1 到 A2",
      "KET (A2 Key) 与 PET (B1 Preliminary)",
      "FCE (B2 First) 及以上为高阶考试",
      "听说读写全面考查",
    ],
    website: Some("https://www.cambridgeenglish.org/"),
  },
];

fn option(text: &str, score: i32) -> AnswerOption {
  AnswerOption { text: text.into(), score }
}

/// Five escalating items: picture-word match, preposition, past tense,
/// short-passage comprehension, advanced vocabulary.
pub fn default_questions() -> Vec<Question> {
  vec![
    Question {
      text: "Select the word for the picture: 🍎".into(),
      options: vec![option("Banana", 0), option("Apple", 50), option("Orange", 0), option("Grape", 0)],
    },
    Question {
      text: "Fill in the blank: 'The cat is _____ the table.' (猫在桌子下面)".into(),
      options: vec![option("in", 0), option("on", 0), option("under", 100), option("at", 0)],
    },
    Question {
      text: "Choose the correct sentence:".into(),
      options: vec![
        option("She go to school yesterday.", 0),
        option("She went to school yesterday.", 200),
        option("She going to school yesterday.", 0),
        option("She goes to school yesterday.", 0),
      ],
    },
    Question {
      text: "Read and answer: 'Tom likes to play football. He plays every Saturday with his friends.' When does Tom play football?".into(),
      options: vec![
        option("Every Sunday", 0),
        option("Every day", 0),
        option("Every Saturday", 300),
        option("With his friends", 0),
      ],
    },
    Question {
      text: "Select the best word to complete the sentence: 'The scientist made a _____ discovery that changed the world.'".into(),
      options: vec![
        option("boring", 0),
        option("significant", 400),
        option("delicious", 0),
        option("purple", 0),
      ],
    },
  ]
}

pub fn find_system_info(id: &str) -> Option<&'static SystemInfo> {
  SYSTEMS_INFO.iter().find(|s| s.id == id)
}
