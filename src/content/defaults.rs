//! Bundled static content, shown whenever the backend has nothing to offer.
//! Each collection substitutes independently; defaults and remote content are
//! never merged.

use crate::types::{BlogPost, Course, GalleryImage, ImageSource, Instructor, SiteConfig};

pub fn site_config() -> SiteConfig {
    SiteConfig {
        logo: ImageSource::new("https://i.ibb.co/7bJkS4B/logo.png"),
        school_name: "FAUSTINA".into(),
        school_name_suffix: "EASY EDUCATION".into(),
    }
}

pub fn gallery() -> Vec<GalleryImage> {
    fn image(src: &str, category: &str, caption: &str) -> GalleryImage {
        GalleryImage {
            src: ImageSource::new(src),
            category: category.into(),
            caption: caption.into(),
        }
    }

    vec![
        image(
            "https://images.unsplash.com/photo-1562774053-701939374585?q=80&w=800&auto=format&fit=crop",
            "campus",
            "Modern architecture of the university campus.",
        ),
        image(
            "https://images.unsplash.com/photo-1523580494863-6f3031224c94?q=80&w=800&auto=format&fit=crop",
            "events",
            "Guest speaker at our annual tech conference.",
        ),
        image(
            "https://images.unsplash.com/photo-1531545514256-b1400bc00f31?q=80&w=800&auto=format&fit=crop",
            "academics",
            "Students engaged in a collaborative project.",
        ),
        image(
            "https://images.unsplash.com/photo-1498243691581-b145c3f54a5a?q=80&w=800&auto=format&fit=crop",
            "campus",
            "Serene view of the campus library.",
        ),
        image(
            "https://images.unsplash.com/photo-1627556592933-ffe99c1cd9eb?q=80&w=800&auto=format&fit=crop",
            "events",
            "Celebrating the achievements of our graduates.",
        ),
        image(
            "https://images.unsplash.com/photo-1532094349884-543bc11b234d?q=80&w=800&auto=format&fit=crop",
            "academics",
            "Hands-on learning in the science lab.",
        ),
        image(
            "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?q=80&w=800&auto=format&fit=crop",
            "campus",
            "A quiet place for students to study and relax.",
        ),
        image(
            "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?q=80&w=800&auto=format&fit=crop",
            "events",
            "Students participating in a coding hackathon.",
        ),
    ]
}

pub fn courses() -> Vec<Course> {
    struct Entry {
        id: i64,
        image: &'static str,
        category: &'static str,
        price: &'static str,
        title: &'static str,
        description: &'static str,
        explanation: &'static str,
        uniqueness: [&'static str; 4],
        lessons: u32,
        students: u32,
        rating: f32,
        instructor: &'static str,
    }

    let entries = [
        Entry {
            id: 1,
            image: "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?q=80&w=800&auto=format&fit=crop",
            category: "Foreign Languages",
            price: "Free",
            title: "Foreign Languages",
            description: "Master a new language with our immersive courses taught by native speakers.",
            explanation: "Our foreign language program focuses on conversational fluency and cultural understanding. Through interactive lessons and real-world scenarios, you will not only learn to speak, read, and write in a new language but also gain a deep appreciation for its cultural context.",
            uniqueness: [
                "Taught by certified native speakers",
                "Focus on conversational skills",
                "Cultural immersion activities",
                "Access to language labs and software",
            ],
            lessons: 15,
            students: 125,
            rating: 4.8,
            instructor: "Dr. Elena Petrova",
        },
        Entry {
            id: 2,
            image: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?q=80&w=800&auto=format&fit=crop",
            category: "Phonics & English Communication",
            price: "$49.99",
            title: "Phonics & English Communication",
            description: "Build a strong foundation in English pronunciation and communication skills.",
            explanation: "This course is designed for learners of all ages to improve their English proficiency. We cover the fundamentals of phonics, grammar, vocabulary, and confident public speaking. Our interactive modules make learning engaging and effective.",
            uniqueness: [
                "Structured phonics program",
                "Confidence-building speaking exercises",
                "Comprehensive grammar modules",
                "Small group practice sessions",
            ],
            lessons: 20,
            students: 310,
            rating: 4.9,
            instructor: "Prof. David Smith",
        },
        Entry {
            id: 3,
            image: "https://images.unsplash.com/photo-1535378437323-95a48a946b6b?q=80&w=800&auto=format&fit=crop",
            category: "Robotics & Coding",
            price: "$79.99",
            title: "Robotics & Coding",
            description: "Step into the future with hands-on robotics and coding workshops.",
            explanation: "Unlock your potential in the world of technology. This course provides a hands-on introduction to robotics, programming, and automation. You will learn to build and code your own robots, understand an IoT project, and develop problem-solving skills.",
            uniqueness: [
                "Hands-on projects with robot kits",
                "Learn Python and C++ for robotics",
                "Introduction to AI and Machine Learning",
                "Compete in robotics challenges",
            ],
            lessons: 25,
            students: 180,
            rating: 4.7,
            instructor: "Dr. Anita Chen",
        },
        Entry {
            id: 4,
            image: "https://images.unsplash.com/photo-1581092921461-39b9d08a9b21?q=80&w=800&auto=format&fit=crop",
            category: "Computer Hardware & IT Skills",
            price: "$59.99",
            title: "Computer Hardware & IT Skills",
            description: "Gain practical knowledge of computer hardware, networking, and IT support.",
            explanation: "This program prepares you for a career in IT support and system administration. You will learn to assemble, troubleshoot, and maintain computer systems, as well as manage networks and ensure cybersecurity. This is a practical, career-focused course.",
            uniqueness: [
                "Real-world hardware assembly labs",
                "Network configuration simulations",
                "Cybersecurity fundamentals",
                "Preparation for CompTIA A+ certification",
            ],
            lessons: 30,
            students: 250,
            rating: 4.8,
            instructor: "Mr. James Lee",
        },
        Entry {
            id: 5,
            image: "https://images.unsplash.com/photo-1554224155-6726b3ff858f?q=80&w=800&auto=format&fit=crop",
            category: "Commerce & Accounts",
            price: "$39.99",
            title: "Commerce & Accounts",
            description: "Understand the principles of commerce, accounting, and financial management.",
            explanation: "This course provides a solid foundation in business and finance. Topics include financial accounting, business law, economics, and management principles. It is ideal for aspiring entrepreneurs and future business leaders.",
            uniqueness: [
                "Case study-based learning",
                "Practical accounting software training",
                "Basics of financial modeling",
                "Guest lectures from industry experts",
            ],
            lessons: 22,
            students: 400,
            rating: 4.6,
            instructor: "Ms. Priya Sharma, CPA",
        },
        Entry {
            id: 6,
            image: "https://images.unsplash.com/photo-1513364776144-60967b0f800f?q=80&w=800&auto=format&fit=crop",
            category: "Creative Arts",
            price: "$69.99",
            title: "Creative Arts",
            description: "Unleash your creativity with our diverse range of arts and design courses.",
            explanation: "Explore your artistic talents in our Creative Arts program. Whether you are interested in painting, sculpture, digital design, or photography, our experienced instructors will guide you in developing your unique artistic voice and building a professional portfolio.",
            uniqueness: [
                "Access to professional art studios",
                "Portfolio development workshops",
                "Instruction in various media",
                "Annual student art exhibition",
            ],
            lessons: 18,
            students: 150,
            rating: 4.9,
            instructor: "Prof. Marco Bianchi",
        },
    ];

    entries
        .into_iter()
        .map(|e| Course {
            id: e.id.into(),
            image: ImageSource::new(e.image),
            category: e.category.into(),
            price: e.price.into(),
            title: e.title.into(),
            description: e.description.into(),
            explanation: e.explanation.into(),
            uniqueness: e.uniqueness.iter().map(|s| (*s).into()).collect(),
            lessons: e.lessons,
            students: e.students,
            rating: e.rating,
            instructor: Instructor {
                name: e.instructor.into(),
            },
        })
        .collect()
}

pub fn posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1.into(),
            image: ImageSource::new(
                "https://images.unsplash.com/photo-1531482615713-2afd69097998?q=80&w=800&auto=format&fit=crop",
            ),
            category: "Technology".into(),
            date: "June 10, 2024".into(),
            author: "John Doe".into(),
            comments: 5,
            title: "The Future of AI in Education".into(),
            excerpt: "Explore how artificial intelligence is revolutionizing the learning experience, from personalized tutoring to automated grading systems.".into(),
            content: "Artificial intelligence (AI) is no longer a concept confined to science fiction; it's a transformative force reshaping industries, and education is no exception. In recent years, AI has begun to revolutionize the learning experience in profound ways, offering possibilities that were once unimaginable.\n\nOne of the most significant impacts of AI in education is its ability to provide personalized learning paths. Traditional classrooms often struggle to cater to the individual pace and style of each student. AI-powered platforms can analyze a student's performance in real-time, identifying strengths and weaknesses. Based on this data, the system can recommend customized content, exercises, and resources, ensuring that each learner receives the support they need to succeed.".into(),
        },
        BlogPost {
            id: 2.into(),
            image: ImageSource::new(
                "https://images.unsplash.com/photo-1523240795612-9a054b0db644?q=80&w=800&auto=format&fit=crop",
            ),
            category: "Student Life".into(),
            date: "May 28, 2024".into(),
            author: "Jane Smith".into(),
            comments: 12,
            title: "5 Tips for a Successful First Year at University".into(),
            excerpt: "Navigating your first year of university can be challenging. Here are five essential tips to help you thrive both academically and socially.".into(),
            content: "Starting university is an exciting milestone, but it can also be overwhelming. The transition to higher education brings new freedoms, responsibilities, and challenges. To help you make the most of this experience, here are five tips for a successful first year.\n\nFirst, get organized from day one. Use a planner or digital calendar to keep track of class schedules, assignment deadlines, and exams. Effective time management is crucial for staying on top of your coursework and reducing stress.\n\nSecond, don't be afraid to ask for help. Whether it's from professors, teaching assistants, or academic advisors, there are numerous resources available to support you. Attending office hours is a great way to clarify doubts and build relationships with your instructors.".into(),
        },
    ]
}
