//! Conversion from the transport-agnostic embed payload to Serenity builders.

use bloxbot_core::RenderedEmbed;
use serenity::all::{Colour, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};

/// Convert a [`RenderedEmbed`] into a Serenity `CreateEmbed`.
pub fn to_create_embed(embed: &RenderedEmbed) -> CreateEmbed {
    let mut author = CreateEmbedAuthor::new(embed.author_name.as_str());
    if let Some(icon) = &embed.author_icon_url {
        author = author.icon_url(icon.as_str());
    }

    let mut builder = CreateEmbed::new()
        .title(embed.title.as_str())
        .url(embed.url.as_str())
        .colour(Colour::new(embed.color))
        .author(author)
        .footer(CreateEmbedFooter::new(embed.footer.as_str()));

    for field in &embed.fields {
        builder = builder.field(field.name.as_str(), field.value.as_str(), field.inline);
    }
    if let Some(image) = &embed.image_url {
        builder = builder.image(image.as_str());
    }
    builder
}
