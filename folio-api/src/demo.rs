//! Built-in content served when no store is available.

use folio_schema::{Project, Testimonial};

fn project(
    title: &str,
    category: &str,
    description: &str,
    images: &[&str],
    featured: bool,
) -> Project {
    Project {
        title: title.into(),
        category: category.into(),
        description: Some(description.into()),
        images: images.iter().map(|image| image.to_string()).collect(),
        featured,
    }
}

fn testimonial(client_name: &str, project_type: &str, quote: &str) -> Testimonial {
    Testimonial {
        client_name: client_name.into(),
        project_type: project_type.into(),
        quote: quote.into(),
        avatar: None,
        rating: 5,
    }
}

pub fn demo_projects() -> Vec<Project> {
    vec![
        project(
            "Warm Minimalist Living Room",
            "Home",
            "Textured neutrals, soft woods, and diffused light.",
            &[
                "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?q=80&w=1600&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1493666438817-866a91353ca9?q=80&w=1600&auto=format&fit=crop",
            ],
            true,
        ),
        project(
            "Contemporary Workspace",
            "Office",
            "Focus-first layout with acoustic elements.",
            &["https://images.unsplash.com/photo-1507209696998-3c532be9b2b3?q=80&w=1600&auto=format&fit=crop"],
            false,
        ),
        project(
            "Handcrafted Oak Dining Table",
            "Furniture",
            "Bespoke live-edge table in matte oil finish.",
            &["https://images.unsplash.com/photo-1600585154526-990dced4db0d?q=80&w=1600&auto=format&fit=crop"],
            true,
        ),
    ]
}

pub fn demo_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "Aarav K.",
            "Home",
            "The space feels like us. Thoughtful, warm, and so well crafted.",
        ),
        testimonial("Meera S.", "Office", "Professional process and stunning results."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_schema::Record;
    use serde_json::to_value;

    #[test]
    fn demo_content_is_valid() {
        for project in demo_projects() {
            assert_eq!(Project::parse(&to_value(&project).unwrap()).unwrap(), project);
        }

        for testimonial in demo_testimonials() {
            assert_eq!(Testimonial::parse(&to_value(&testimonial).unwrap()).unwrap(), testimonial);
        }
    }

    #[test]
    fn demo_projects_match_catalogue() {
        let projects = demo_projects();

        let featured = projects.iter().filter(|p| p.featured).count();
        assert_eq!(projects.len(), 3);
        assert_eq!(featured, 2);
        assert_eq!(projects[0].images.len(), 2);
    }
}
