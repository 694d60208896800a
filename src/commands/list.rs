//! List site content

use anyhow::Result;

use crate::content::{collect_posts, notes, FsContentSource, PostsGroup};
use crate::cv::{create_resume, ResumeVariant};
use crate::helpers::date::format_display;
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str, all: bool) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let selection = if all {
                PostsGroup::ALL
            } else {
                PostsGroup::PUBLISHED | PostsGroup::ARCHIVED
            };
            let source = FsContentSource::from_site(folio);
            let posts = collect_posts(&source, selection)?;

            println!("Posts ({}):", posts.len());
            for post in posts {
                let mut flags = Vec::new();
                if !post.published {
                    flags.push("unpublished");
                }
                if post.archived {
                    flags.push("archived");
                }
                let suffix = if flags.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", flags.join(", "))
                };
                println!(
                    "  {} - {} [{}]{}",
                    format_display(&post.date),
                    post.title,
                    post.slug,
                    suffix
                );
            }
        }
        "note" | "notes" => {
            let listed = notes::list_notes(&folio.notes_dir)?;
            println!("Notes ({}):", listed.len());
            for note in listed {
                println!("  {} [{}]", note.name, note.slug);
            }
        }
        "resume" | "resumes" => {
            println!("Resume variants ({}):", ResumeVariant::ALL.len());
            for variant in ResumeVariant::ALL {
                let resume = create_resume(variant);
                println!(
                    "  {} - {} positions, {} projects, {} education entries",
                    variant,
                    resume.work_experiences.len(),
                    resume.projects.len(),
                    resume.education.len()
                );
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, notes, resume",
                content_type
            );
        }
    }

    Ok(())
}
