use super::BlogPost;

static POSTS: [BlogPost; 4] = [
    BlogPost {
        slug: "designing-for-accessibility",
        title: "Designing for Accessibility: Best Practices",
        excerpt: "Exploring how to create inclusive designs that work for everyone, regardless of ability or circumstance.",
        date: "2025-03-10",
        display_date: "March 10, 2025",
        image: "/placeholder.svg",
        body: "\
Exploring how to create inclusive designs that work for everyone, regardless of ability or circumstance.

## Start with real constraints

Low-bandwidth connections, shared devices and screen readers shaped most of the decisions in the Pen Pal and \
Santos Creations projects. Designing for those constraints first made the products better for every user.

- Keep contrast at WCAG AA or better.
- Give every interactive element a visible focus state.
- Pair icons with text labels.
",
    },
    BlogPost {
        slug: "design-systems-product-development",
        title: "The Role of Design Systems in Modern Product Development",
        excerpt: "How design systems can streamline workflows, ensure consistency, and enable teams to focus on solving user problems.",
        date: "2025-02-22",
        display_date: "February 22, 2025",
        image: "/placeholder.svg",
        body: "\
How design systems can streamline workflows, ensure consistency, and enable teams to focus on solving user problems.

## Components are decisions

A library of 30+ reusable components let the Santos Creations team ship new pages without reopening settled \
questions about spacing, type and colour. The system is the record of those decisions.
",
    },
    BlogPost {
        slug: "user-research-startups",
        title: "User Research Methods for Startups on a Budget",
        excerpt: "Practical approaches to gathering valuable user insights without breaking the bank.",
        date: "2025-01-15",
        display_date: "January 15, 2025",
        image: "/placeholder.svg",
        body: "\
Practical approaches to gathering valuable user insights without breaking the bank.

## Cheap methods that still work

1. Five remote interviews beat fifty unanswered surveys.
2. Competitive analysis costs nothing but time.
3. Paper prototypes find navigation problems before any pixels are pushed.
",
    },
    BlogPost {
        slug: "designer-developer-collaboration",
        title: "From Sketch to Code: Bridging the Designer-Developer Gap",
        excerpt: "Strategies for better collaboration between designers and developers to create seamless product experiences.",
        date: "2024-12-05",
        display_date: "December 5, 2024",
        image: "/placeholder.svg",
        body: "\
Strategies for better collaboration between designers and developers to create seamless product experiences.

## Share the vocabulary

Naming components the same way in Figma and in code removes a whole class of handoff questions. Reviewing \
builds together weekly catches the rest.
",
    },
];

/// Blog posts, newest first.
pub fn blog_posts() -> &'static [BlogPost] {
    &POSTS
}
